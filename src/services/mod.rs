pub mod favorite_service;
