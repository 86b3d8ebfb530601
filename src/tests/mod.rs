//! tests/mod.rs
//! Suite de integración: endpoints completos sobre el backend en memoria y
//! pruebas directas del almacenamiento.

mod event_tests;
mod store_tests;
mod support;
