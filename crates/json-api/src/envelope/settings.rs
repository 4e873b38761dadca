//! Process-global error rendering settings.

use std::sync::atomic::{AtomicBool, Ordering};

static EXPOSE_ERROR_DETAILS: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_expose_error_details(expose: bool) {
    EXPOSE_ERROR_DETAILS.store(expose, Ordering::Relaxed);
}

pub(super) fn expose_error_details() -> bool {
    EXPOSE_ERROR_DETAILS.load(Ordering::Relaxed)
}
