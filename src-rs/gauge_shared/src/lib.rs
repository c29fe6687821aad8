#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Shared utilities for the Gauge quantity resolver

pub mod error;
