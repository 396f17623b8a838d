pub mod bounds;
pub mod containment;
pub mod cspace;
