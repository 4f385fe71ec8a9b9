//! Shared fixtures: a mutable shape service and a database service.

#![allow(dead_code)]

use binding_registry::Dependency;
use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

pub trait Shape: Debug + Send + Sync {
    fn area(&self) -> i64;
    fn set_area(&self, area: i64);
}

#[derive(Debug)]
pub struct Circle {
    area: AtomicI64,
}

impl Circle {
    pub fn new(area: i64) -> Self {
        Self {
            area: AtomicI64::new(area),
        }
    }
}

impl Shape for Circle {
    fn area(&self) -> i64 {
        self.area.load(Ordering::SeqCst)
    }

    fn set_area(&self, area: i64) {
        self.area.store(area, Ordering::SeqCst);
    }
}

#[derive(Debug)]
pub struct Rectangle {
    area: AtomicI64,
}

impl Rectangle {
    pub fn new(area: i64) -> Self {
        Self {
            area: AtomicI64::new(area),
        }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> i64 {
        self.area.load(Ordering::SeqCst)
    }

    fn set_area(&self, area: i64) {
        self.area.store(area, Ordering::SeqCst);
    }
}

pub trait Database: Debug + Send + Sync {
    fn driver(&self) -> &str;
}

#[derive(Debug)]
pub struct MySql;

impl Database for MySql {
    fn driver(&self) -> &str {
        "mysql"
    }
}

/// A plain value type bound by value rather than behind an `Arc`.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub name: String,
    pub retries: u32,
}

impl Dependency for Settings {}

pub fn new_circle() -> Arc<dyn Shape> {
    Arc::new(Circle::new(100500))
}
