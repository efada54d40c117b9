//! End-to-end collision scenarios and randomized properties

mod scenarios;
