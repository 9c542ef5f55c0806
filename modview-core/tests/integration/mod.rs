//! Integration tests driving the controller through a fake presentation layer

mod scenarios;
