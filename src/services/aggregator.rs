// src/services/aggregator.rs

//! Visões derivadas, somente leitura, sobre as coleções.
//!
//! Tudo aqui é função pura: sem estado, sem escrita e sem erro. Referência
//! pendente vira placeholder; coleção vazia vira agregado zerado.

use std::collections::HashMap;

use rust_decimal::Decimal;

/// Mapa id → entidade, emprestado da coleção.
#[derive(Debug)]
pub struct Lookup<'a, T> {
    by_id: HashMap<&'a str, &'a T>,
}

impl<'a, T> Lookup<'a, T> {
    pub fn get(&self, id: &str) -> Option<&'a T> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

// Em caso de id repetido, o último vence (como um Map construído em ordem).
pub fn build_lookup<'a, T, F>(collection: &'a [T], id_selector: F) -> Lookup<'a, T>
where
    F: Fn(&'a T) -> &'a str,
{
    let by_id = collection.iter().map(|e| (id_selector(e), e)).collect();
    Lookup { by_id }
}

#[derive(Debug, PartialEq)]
pub enum Resolved<'a, T> {
    Found(&'a T),
    Placeholder(&'a str),
}

impl<'a, T> Resolved<'a, T> {
    pub fn entity(&self) -> Option<&'a T> {
        match *self {
            Resolved::Found(entity) => Some(entity),
            Resolved::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Resolved::Placeholder(_))
    }

    /// Rótulo para exibição: o campo escolhido da entidade, ou o placeholder.
    pub fn label<F>(&self, field: F) -> &'a str
    where
        F: FnOnce(&'a T) -> &'a str,
    {
        match *self {
            Resolved::Found(entity) => field(entity),
            Resolved::Placeholder(placeholder) => placeholder,
        }
    }
}

impl<T> Clone for Resolved<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Resolved<'_, T> {}

pub fn resolve<'a, T>(lookup: &Lookup<'a, T>, id: &str, placeholder: &'a str) -> Resolved<'a, T> {
    match lookup.get(id) {
        Some(entity) => Resolved::Found(entity),
        None => Resolved::Placeholder(placeholder),
    }
}

/// Dobra (`reducer`) sobre o subconjunto que passa no `predicate`.
pub fn aggregate<T, A, P, R>(collection: &[T], predicate: P, init: A, reducer: R) -> A
where
    P: Fn(&T) -> bool,
    R: Fn(A, &T) -> A,
{
    collection
        .iter()
        .filter(|e| predicate(*e))
        .fold(init, reducer)
}

pub fn count_where<T, P>(collection: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    aggregate(collection, predicate, 0, |count, _| count + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub count: usize,
    pub total: Decimal,
}

/// Soma que satura em `Decimal::MAX`/`Decimal::MIN` em vez de entrar em pânico.
///
/// Os valores vêm de slots persistidos (editáveis fora da aplicação), então
/// somas acima de ~7,9e28 são possíveis.
pub fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(if b.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

// Contagem + soma de um valor sobre o subconjunto filtrado
pub fn summarize<T, P, V>(collection: &[T], predicate: P, value: V) -> Summary
where
    P: Fn(&T) -> bool,
    V: Fn(&T) -> Decimal,
{
    aggregate(collection, predicate, Summary::default(), |acc, e| Summary {
        count: acc.count + 1,
        total: saturating_add(acc.total, value(e)),
    })
}

/// Os últimos `n` na ordem de inserção (a ordem de inserção é a "recência").
pub fn recent<T>(collection: &[T], n: usize) -> &[T] {
    &collection[collection.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        amount: i64,
        paid: bool,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "a", name: "Ana", amount: 120, paid: false },
            Row { id: "b", name: "Bia", amount: 30, paid: true },
            Row { id: "c", name: "Caio", amount: 45, paid: false },
            Row { id: "d", name: "Duda", amount: 5, paid: true },
            Row { id: "e", name: "Edu", amount: 0, paid: false },
        ]
    }

    #[test]
    fn resolve_hits_and_misses() {
        let rows = rows();
        let lookup = build_lookup(&rows, |r| r.id);
        assert_eq!(lookup.len(), 5);

        let hit = resolve(&lookup, "b", "X");
        assert_eq!(hit.entity(), Some(&rows[1]));
        assert_eq!(hit.label(|r| r.name), "Bia");

        let miss = resolve(&lookup, "zzz", "X");
        assert!(miss.is_placeholder());
        assert_eq!(miss.label(|r| r.name), "X");
    }

    #[test]
    fn resolve_on_empty_lookup_is_placeholder() {
        let empty: Vec<Row> = Vec::new();
        let lookup = build_lookup(&empty, |r| r.id);
        assert!(lookup.is_empty());
        assert_eq!(resolve(&lookup, "a", "Unknown"), Resolved::Placeholder("Unknown"));
    }

    #[test]
    fn disjoint_predicates_add_up() {
        let rows = rows();
        let value = |r: &Row| Decimal::from(r.amount);

        let unpaid = summarize(&rows, |r| !r.paid, value);
        let paid = summarize(&rows, |r| r.paid, value);
        let all = summarize(&rows, |_| true, value);

        assert_eq!(unpaid.total + paid.total, all.total);
        assert_eq!(unpaid.count + paid.count, all.count);
        assert_eq!(unpaid.total, Decimal::from(165));
    }

    #[test]
    fn empty_collection_aggregates_to_zero() {
        let empty: Vec<Row> = Vec::new();
        assert_eq!(summarize(&empty, |_| true, |r| Decimal::from(r.amount)), Summary::default());
        assert_eq!(count_where(&empty, |_| true), 0);
    }

    #[test]
    fn huge_totals_saturate_instead_of_panicking() {
        let big = Decimal::MAX - Decimal::ONE;
        let values = [big, big, big];

        let summary = summarize(&values, |_| true, |v| *v);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, Decimal::MAX);

        let negatives = [-big, -big];
        assert_eq!(summarize(&negatives, |_| true, |v| *v).total, Decimal::MIN);
    }

    #[test]
    fn recent_keeps_insertion_order() {
        let rows = rows();
        let ids: Vec<&str> = recent(&rows, 3).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["c", "d", "e"]);

        assert_eq!(recent(&rows, 10).len(), 5);
        assert!(recent(&rows, 0).is_empty());
    }
}
