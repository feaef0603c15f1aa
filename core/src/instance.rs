//! Named structures.

use alloc::format;
use alloc::string::String;

use crate::kind::StructureKind;
use crate::law::LawId;
use crate::lift::Lift;
use crate::structure::AlgebraicStructure;
use crate::widen::Widen;

/// A structure with a name, as consumed by the verification harness.
#[derive(Debug, Clone)]
pub struct Instance<S> {
    name: String,
    structure: S,
}

impl<S> Instance<S> {
    /// Names a structure.
    pub fn new(name: impl Into<String>, structure: S) -> Self {
        Self {
            name: name.into(),
            structure,
        }
    }

    /// The instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The structure.
    pub fn structure(&self) -> &S {
        &self.structure
    }

    /// Consumes the instance, returning the structure.
    pub fn into_structure(self) -> S {
        self.structure
    }

    /// The pointwise lift over arrows from `I`, named `"<name> (pointwise)"`.
    pub fn pointwise<I>(&self) -> Instance<S::Lifted>
    where
        S: Lift<I>,
    {
        Instance::new(format!("{} (pointwise)", self.name), self.structure.pointwise())
    }

    /// The same structure viewed as the weaker kind `U`, named
    /// `"<name> as <kind>"`.
    pub fn widen<U>(&self) -> Instance<U>
    where
        S: Widen<U>,
        U: AlgebraicStructure,
    {
        Instance::new(format!("{} as {}", self.name, U::KIND), self.structure.widen())
    }
}

impl<S: AlgebraicStructure> Instance<S> {
    /// The structure's kind.
    pub fn kind(&self) -> StructureKind {
        S::KIND
    }

    /// The laws the structure declares.
    pub fn laws(&self) -> &'static [LawId] {
        S::LAWS
    }
}
