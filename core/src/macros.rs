//! Law registry declaration.
//!
//! `law_registry!` implements [`AlgebraicStructure`](crate::AlgebraicStructure)
//! for a shape/kind pairing from one table: the ordered law list and the
//! dispatch from each [`LawId`](crate::LawId) to its law function are
//! generated from the same lines, so they cannot drift apart. Each entry
//! names the operand bindings; their count must equal the law's arity.

macro_rules! law_registry {
    ($(
        $kind:ident for $ty:ty {
            $($law:ident($($arg:ident),+) => $check:path;)+
        }
    )+) => {$(
        impl<T: $crate::operation::Value> $crate::structure::AlgebraicStructure for $ty {
            type Value = T;

            const KIND: $crate::kind::StructureKind = $crate::kind::StructureKind::$kind;

            const LAWS: &'static [$crate::law::LawId] = &[$($crate::law::LawId::$law),+];

            #[allow(unreachable_patterns)]
            fn check(
                &self,
                law: $crate::law::LawId,
                eq: &dyn $crate::equivalence::Equivalence<T>,
                operands: &[T],
            ) -> Option<bool> {
                match law {
                    $($crate::law::LawId::$law => match operands {
                        [$($arg),+] => Some($check(self, eq, $($arg),+)),
                        _ => None,
                    },)+
                    _ => None,
                }
            }
        }
    )+};
}
