use sea_orm::entity::prelude::*;

/// Sellable room category. Soft-deleted via `is_active`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Nightly price in minor units (cents).
    pub base_price_cents: i64,
    pub capacity: i32,
    /// `single` | `double` | `queen` | `king`
    pub bed_type: String,
    pub size: Option<i32>,
    /// JSON array of amenity names.
    #[sea_orm(column_type = "JsonBinary")]
    pub amenities: Json,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rooms::Entity")]
    Rooms,
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
