//! Test Helpers

use sqlx::query_scalar;

use crate::{
    domain::{
        movements::records::MovementKind, products::records::ProductId, sizes::records::SizeId,
    },
    test::TestContext,
};

async fn insert_product(ctx: &TestContext, name: &str, has_sizes: bool, active: bool) -> ProductId {
    let id: i32 = query_scalar(
        "INSERT INTO produtos (nome, tem_tamanhos, status) VALUES ($1, $2, $3) RETURNING produto_id",
    )
    .bind(name)
    .bind(has_sizes)
    .bind(active)
    .fetch_one(ctx.db.pool())
    .await
    .expect("Failed to insert product");

    ProductId::from_i32(id)
}

pub(crate) async fn create_product(ctx: &TestContext, name: &str, has_sizes: bool) -> ProductId {
    insert_product(ctx, name, has_sizes, true).await
}

pub(crate) async fn create_inactive_product(ctx: &TestContext, name: &str) -> ProductId {
    insert_product(ctx, name, false, false).await
}

pub(crate) async fn size_id(ctx: &TestContext, name: &str) -> SizeId {
    let id: i32 = query_scalar("SELECT tamanho_id FROM tamanhos WHERE nome = $1")
        .bind(name)
        .fetch_one(ctx.db.pool())
        .await
        .expect("Failed to look up size");

    SizeId::from_i32(id)
}

/// Quantity of the (product, size) stock row, `None` when no row exists.
pub(crate) async fn stock_quantity(
    ctx: &TestContext,
    product: ProductId,
    size: Option<SizeId>,
) -> Option<i32> {
    query_scalar(
        "SELECT quantidade FROM estoque \
         WHERE produto_id = $1 AND tamanho_id IS NOT DISTINCT FROM $2",
    )
    .bind(product.into_i32())
    .bind(size.map(SizeId::into_i32))
    .fetch_optional(ctx.db.pool())
    .await
    .expect("Failed to read stock quantity")
}

/// Stock rows for the product, narrowed to one size when given.
pub(crate) async fn count_stock_rows(
    ctx: &TestContext,
    product: ProductId,
    size: Option<SizeId>,
) -> i64 {
    query_scalar(
        "SELECT COUNT(*) FROM estoque \
         WHERE produto_id = $1 AND ($2::int IS NULL OR tamanho_id = $2)",
    )
    .bind(product.into_i32())
    .bind(size.map(SizeId::into_i32))
    .fetch_one(ctx.db.pool())
    .await
    .expect("Failed to count stock rows")
}

pub(crate) async fn count_movements(
    ctx: &TestContext,
    product: ProductId,
    kind: Option<MovementKind>,
) -> i64 {
    query_scalar(
        "SELECT COUNT(*) FROM movimentacoes_estoque \
         WHERE produto_id = $1 AND ($2::text IS NULL OR tipo = $2)",
    )
    .bind(product.into_i32())
    .bind(kind.map(MovementKind::as_str))
    .fetch_one(ctx.db.pool())
    .await
    .expect("Failed to count movements")
}
