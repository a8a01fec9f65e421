use sea_orm_migration::prelude::*;

/// Builds a named foreign key from `from_tbl.from_col` to `to_tbl.id`.
pub fn references<T, C, R>(
    name: &str,
    from_tbl: T,
    from_col: C,
    to_tbl: R,
    on_delete: ForeignKeyAction,
) -> ForeignKeyCreateStatement
where
    T: IntoIden,
    C: IntoIden,
    R: IntoIden,
{
    ForeignKey::create()
        .name(name)
        .from_tbl(from_tbl)
        .from_col(from_col)
        .to_tbl(to_tbl)
        .to_col(Alias::new("id"))
        .on_delete(on_delete)
        .to_owned()
}
