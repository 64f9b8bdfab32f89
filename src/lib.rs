pub mod balance;
pub mod compound;
pub mod element;
pub mod error;
pub mod recognize;
pub mod render;
pub mod report;
pub mod shape;
pub mod tables;
pub mod traits;

pub use compound::{
    Acid, Compound, CompoundKind, HydrogenAcidFragment, HydrogenSalt, Oxide, Salt,
    SaltAcidFragment, SaltHydrate, Sulfide,
};
pub use element::Element;
pub use error::NomenError;
pub use recognize::recognize;
pub use report::Report;
pub use shape::{classify_shape, Shape};
pub use tables::{OxidationContext, Tables};
pub use traits::{Group, HasAmount, HasOxidation, Nomenclature};
