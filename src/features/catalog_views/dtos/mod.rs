mod view_dto;

pub use view_dto::{OpenViewQuery, ViewStateDto, ViewStatus, VisibleRowDto};
