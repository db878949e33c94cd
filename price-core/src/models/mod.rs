mod fuel_type;
mod seller_type;
mod transmission;
mod vehicle_form;

pub use fuel_type::FuelType;
pub use seller_type::SellerType;
pub use transmission::Transmission;
pub use vehicle_form::{Field, VehicleForm};
