pub mod associate;
pub mod department;
pub mod designation;
pub mod enterprise;
