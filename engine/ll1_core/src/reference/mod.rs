//! Forward references for recursive grammars.
//!
//! A [`Ref`] is declared first, mentioned by other rules through
//! [`Ref::forward`], and bound exactly once with [`Ref::set`] after the rules
//! it depends on exist:
//!
//! ```
//! use ll1_core::{symbol, Input, Ref};
//!
//! // nested = '(' nested ')' | 'x'
//! let nested = Ref::named("nested");
//! let parens = symbol('(').and_r(nested.forward()).and_l(symbol(')'));
//! nested.set(parens.or(symbol('x')));
//! let nested = nested.into_rule();
//!
//! let text: Vec<char> = "((x))".chars().collect();
//! assert_eq!(nested.run(Input::new(&text)).unwrap(), 'x');
//! ```
//!
//! The `Ref` owns the bound rule; forward handles hold only a weak
//! reference, so a recursive grammar is a tree of strong edges plus weak
//! back-edges and is freed when its last owner goes away.
//!
//! Misuse is a defect in the grammar, not in the input, and panics with a
//! [`GrammarError`]:
//! - forcing a forward handle before `set`
//! - calling `set` twice
//! - dropping the `Ref` while a grammar still reaches it through `forward`
//!
//! The last case is easy to hit with mutually recursive rules built inside a
//! function; see [`Ref::forward`] for the ownership pattern that avoids it.

use std::borrow::Cow;
use std::sync::{Arc, OnceLock, Weak};

use ll1_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::error::{grammar_fault, GrammarError};
use crate::input::Input;
use crate::memo::Memo;
use crate::parser::{Parser, Rule};
use crate::result::ParseResult;
use crate::symset::SymSet;
use crate::Symbol;

struct Slot<I, A> {
    name: Cow<'static, str>,
    target: OnceLock<Rule<I, A>>,
}

impl<I, A> Slot<I, A> {
    fn target(&self) -> &Rule<I, A> {
        match self.target.get() {
            Some(rule) => rule,
            None => grammar_fault(GrammarError::Unbound {
                rule: self.name.to_string(),
            }),
        }
    }
}

/// A rule that is declared before it is defined.
///
/// Parsing through the `Ref` itself, or through any of its forward handles,
/// is equivalent to parsing through the rule it was bound to.
pub struct Ref<I, A> {
    slot: Arc<Slot<I, A>>,
}

impl<I: Symbol, A: 'static> Ref<I, A> {
    /// An unbound rule named "anonymous" in diagnostics.
    pub fn new() -> Self {
        Ref::named("anonymous")
    }

    /// An unbound rule named `name` in diagnostics.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Ref {
            slot: Arc::new(Slot {
                name: name.into(),
                target: OnceLock::new(),
            }),
        }
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.slot.name
    }

    /// Returns `true` once `set` has been called.
    pub fn is_bound(&self) -> bool {
        self.slot.target.get().is_some()
    }

    /// A non-owning handle for use inside the rule's own definition, or in
    /// other rules that refer back to it.
    ///
    /// Its emptiness and first set are resolved on first use, so the handle
    /// may appear after a non-empty prefix before `set` is called.
    ///
    /// The handle does not keep the `Ref` alive. Every `Ref` a grammar
    /// reaches must be owned by something that outlives the grammar's use:
    /// for mutually recursive rules, embed the inner rule with
    /// [`into_rule`](Self::into_rule) and point only the back-edge at
    /// `forward`.
    ///
    /// ```
    /// use ll1_core::{symbol, Input, Ref, Rule};
    ///
    /// // outer = inner | 'x'; inner = '(' outer ')'
    /// fn grammar() -> Rule<char, char> {
    ///     let outer = Ref::named("outer");
    ///     let inner = Ref::named("inner");
    ///     inner.set(symbol('(').and_r(outer.forward()).and_l(symbol(')')));
    ///     // `outer` owns `inner`; a `inner.forward()` here would dangle
    ///     // once this function returns.
    ///     outer.set(inner.into_rule().or(symbol('x')));
    ///     outer.into_rule()
    /// }
    ///
    /// let text: Vec<char> = "((x))".chars().collect();
    /// assert_eq!(grammar().run(Input::new(&text)).unwrap(), 'x');
    /// ```
    pub fn forward(&self) -> Rule<I, A> {
        Rule::new(Forward {
            slot: Arc::downgrade(&self.slot),
            name: self.slot.name.clone(),
            empty: Memo::new(),
            first: Memo::new(),
        })
    }

    /// Bind the rule.
    ///
    /// # Panics
    /// Panics with [`GrammarError::AlreadyBound`] if called more than once.
    pub fn set(&self, rule: Rule<I, A>) {
        debug!(rule = %self.slot.name, "binding rule");
        if self.slot.target.set(rule).is_err() {
            grammar_fault(GrammarError::AlreadyBound {
                rule: self.slot.name.to_string(),
            });
        }
    }

    /// Give up the builder, keeping the bound rule alive as an ordinary
    /// [`Rule`]. Forward handles stay valid for as long as the result lives.
    pub fn into_rule(self) -> Rule<I, A> {
        Rule::new(self)
    }
}

impl<I: Symbol, A: 'static> Default for Ref<I, A> {
    fn default() -> Self {
        Ref::new()
    }
}

impl<I: Symbol, A: 'static> Parser<I, A> for Ref<I, A> {
    fn accepts_empty(&self) -> bool {
        self.slot.target().accepts_empty()
    }

    fn first_set(&self) -> &SymSet<I> {
        self.slot.target().first_set()
    }

    fn parse<'a>(&self, input: Input<'a, I>, follow: &SymSet<I>) -> ParseResult<'a, I, A> {
        ensure_sufficient_stack(|| self.slot.target().parse(input, follow))
    }
}

/// Weak back-edge to a [`Ref`].
struct Forward<I, A> {
    slot: Weak<Slot<I, A>>,
    name: Cow<'static, str>,
    empty: Memo<bool>,
    first: Memo<SymSet<I>>,
}

impl<I, A> Forward<I, A> {
    fn slot(&self) -> Arc<Slot<I, A>> {
        match self.slot.upgrade() {
            Some(slot) => slot,
            None => grammar_fault(GrammarError::Dropped {
                rule: self.name.to_string(),
            }),
        }
    }
}

impl<I: Symbol, A: 'static> Parser<I, A> for Forward<I, A> {
    fn accepts_empty(&self) -> bool {
        *self
            .empty
            .get_or_compute(|| self.slot().target().accepts_empty())
    }

    fn first_set(&self) -> &SymSet<I> {
        self.first
            .get_or_compute(|| self.slot().target().first_set().clone())
    }

    fn parse<'a>(&self, input: Input<'a, I>, follow: &SymSet<I>) -> ParseResult<'a, I, A> {
        let slot = self.slot();
        ensure_sufficient_stack(|| slot.target().parse(input, follow))
    }
}
