mod office_dto;

pub use office_dto::*;
