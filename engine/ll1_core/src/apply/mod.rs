//! Multi-way sequencing.
//!
//! `a.and(b).and(c).map(|a, b, c| …)` parses `a`, `b`, `c` in order and
//! combines their values in one closure. Each builder is inert until `map`
//! or `tuple` turns it into a [`Rule`]; underneath, every arity is a chain
//! of applicative `ap` steps, so lookahead for each operand is derived from
//! the operands after it.
//!
//! Arities 2 through 6 are provided.

use crate::combinator::ap;
use crate::parser::Rule;
use crate::Symbol;

/// Two parsers in sequence.
pub struct ApplyBuilder2<I, A, B> {
    pa: Rule<I, A>,
    pb: Rule<I, B>,
}

impl<I: Symbol, A: 'static, B: 'static> ApplyBuilder2<I, A, B> {
    pub(crate) fn new(pa: Rule<I, A>, pb: Rule<I, B>) -> Self {
        ApplyBuilder2 { pa, pb }
    }

    /// Keep both values as a pair.
    pub fn tuple(self) -> Rule<I, (A, B)> {
        ap(self.pa.map(|a: A| move |b: B| (a, b)), self.pb)
    }

    /// Combine both values.
    pub fn map<R: 'static>(
        self,
        combine: impl Fn(A, B) -> R + Send + Sync + 'static,
    ) -> Rule<I, R> {
        self.tuple().map(move |(a, b)| combine(a, b))
    }
}

macro_rules! apply_builder {
    ($doc:literal, $name:ident, $prev:ident, ($($t:ident $v:ident),+), $last:ident $lv:ident) => {
        #[doc = $doc]
        pub struct $name<I, $($t,)+ $last> {
            init: $prev<I, $($t),+>,
            last: Rule<I, $last>,
        }

        impl<I: Symbol, $($t: 'static,)+ $last: 'static> $name<I, $($t,)+ $last> {
            /// Keep every value as a tuple.
            pub fn tuple(self) -> Rule<I, ($($t,)+ $last)> {
                let init = self
                    .init
                    .tuple()
                    .map(|($($v,)+)| move |$lv: $last| ($($v,)+ $lv));
                ap(init, self.last)
            }

            /// Combine every value.
            pub fn map<R: 'static>(
                self,
                combine: impl Fn($($t,)+ $last) -> R + Send + Sync + 'static,
            ) -> Rule<I, R> {
                self.tuple().map(move |($($v,)+ $lv)| combine($($v,)+ $lv))
            }
        }
    };
}

macro_rules! chain_builder {
    ($from:ident<$($t:ident),+> => $to:ident) => {
        impl<I: Symbol, $($t: 'static),+> $from<I, $($t),+> {
            /// Append another parser to the sequence.
            pub fn and<N: 'static>(self, next: Rule<I, N>) -> $to<I, $($t,)+ N> {
                $to {
                    init: self,
                    last: next,
                }
            }
        }
    };
}

apply_builder!("Three parsers in sequence.", ApplyBuilder3, ApplyBuilder2, (A a, B b), C c);
apply_builder!("Four parsers in sequence.", ApplyBuilder4, ApplyBuilder3, (A a, B b, C c), D d);
apply_builder!(
    "Five parsers in sequence.",
    ApplyBuilder5,
    ApplyBuilder4,
    (A a, B b, C c, D d),
    E e
);
apply_builder!(
    "Six parsers in sequence.",
    ApplyBuilder6,
    ApplyBuilder5,
    (A a, B b, C c, D d, E e),
    F f
);

chain_builder!(ApplyBuilder2<A, B> => ApplyBuilder3);
chain_builder!(ApplyBuilder3<A, B, C> => ApplyBuilder4);
chain_builder!(ApplyBuilder4<A, B, C, D> => ApplyBuilder5);
chain_builder!(ApplyBuilder5<A, B, C, D, E> => ApplyBuilder6);

#[cfg(test)]
mod tests;
