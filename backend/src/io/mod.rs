//! # IO Module
//!
//! Interface layer exposing the domain to the outside world. Only a REST
//! surface exists today.

pub mod rest;
