//! Business logic: one object per restaurant use case, each borrowing a `RestaurantStore`.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::CreateRestaurantBiz;
pub use delete::DeleteRestaurantBiz;
pub use get::GetRestaurantBiz;
pub use list::ListRestaurantBiz;
pub use update::UpdateRestaurantBiz;
