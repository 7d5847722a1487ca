use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(hotel_rooms_migration::Migrator).await;
}
