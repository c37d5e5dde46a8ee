mod consolidatable;

pub use consolidatable::Consolidatable;
