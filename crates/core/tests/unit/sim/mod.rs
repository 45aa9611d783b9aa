//! Simulation front-end tests: the image loader.
