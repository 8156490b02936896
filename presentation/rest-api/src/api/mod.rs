pub mod error;
pub mod health {
    pub mod routes;
}
pub mod menu {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
    pub mod upload;
}
pub mod tags;
