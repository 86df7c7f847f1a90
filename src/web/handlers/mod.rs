pub mod integrity;
pub mod profiles;
