// src/produtos/mod.rs

// Módulo de produtos: DTOs e entidade, validação, mapeamento, port de
// persistência, service e rotas.
pub mod produtos_mapper;
pub mod produtos_repository;
pub mod produtos_router;
pub mod produtos_service;
pub mod produtos_structs;
pub mod produtos_validator;
