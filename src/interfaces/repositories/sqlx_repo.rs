use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCategoryRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxInquiryRepo {
    pub pool: PgPool,
}
