// ============================================================================
// CONTRATO DE RECONCILIACIÓN DE CACHÉ
// ============================================================================
// Todos los stores mantienen su colección local con estas cuatro
// operaciones, idénticas en cada dominio:
// - list-fetch reemplaza la colección COMPLETA (sin merge por clave)
// - create antepone el registro nuevo (índice 0)
// - update reemplaza in situ por clave de identidad; sin match, no-op
// - delete filtra por clave de identidad; sin match, no-op
// ============================================================================

use crate::models::Identified;

/// Reemplazo total tras un list-fetch: lo anterior se descarta
pub fn replace_all<T>(cache: &mut Vec<T>, items: Vec<T>) {
    *cache = items;
}

/// Alta: el registro nuevo va al frente de la colección
pub fn prepend<T>(cache: &mut Vec<T>, item: T) {
    cache.insert(0, item);
}

/// Update in situ: conserva la posición y el orden del resto.
/// Si la clave no está, la colección queda intacta (no insert-on-miss).
pub fn replace_by_id<T: Identified>(cache: &mut Vec<T>, updated: T) -> bool {
    match cache.iter().position(|item| item.id() == updated.id()) {
        Some(index) => {
            cache[index] = updated;
            true
        }
        None => false,
    }
}

/// Baja por clave de identidad; clave ausente = no-op
pub fn remove_by_id<T: Identified>(cache: &mut Vec<T>, id: u64) -> bool {
    let before = cache.len();
    cache.retain(|item| item.id() != id);
    cache.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: u64,
        label: &'static str,
    }

    impl Identified for Record {
        fn id(&self) -> u64 {
            self.id
        }
    }

    fn record(id: u64, label: &'static str) -> Record {
        Record { id, label }
    }

    #[test]
    fn replace_all_discards_previous_contents() {
        let mut cache = vec![record(1, "old"), record(2, "old")];
        replace_all(&mut cache, vec![record(9, "new")]);
        assert_eq!(cache, vec![record(9, "new")]);
    }

    #[test]
    fn prepend_puts_new_record_first() {
        let mut cache = vec![record(1, "a"), record(2, "b")];
        prepend(&mut cache, record(3, "c"));
        assert_eq!(cache.len(), 3);
        assert_eq!(cache[0].id, 3);
        assert_eq!(cache[1].id, 1);
    }

    #[test]
    fn replace_by_id_keeps_position_and_order() {
        let mut cache = vec![record(1, "a"), record(2, "b"), record(3, "c")];
        let replaced = replace_by_id(&mut cache, record(2, "B"));
        assert!(replaced);
        assert_eq!(cache[0], record(1, "a"));
        assert_eq!(cache[1], record(2, "B"));
        assert_eq!(cache[2], record(3, "c"));
    }

    #[test]
    fn replace_by_id_missing_key_is_noop() {
        let mut cache = vec![record(1, "a")];
        let replaced = replace_by_id(&mut cache, record(99, "x"));
        assert!(!replaced);
        assert_eq!(cache, vec![record(1, "a")]);
    }

    #[test]
    fn remove_by_id_drops_exactly_one() {
        let mut cache = vec![record(5, "a"), record(6, "b")];
        let removed = remove_by_id(&mut cache, 5);
        assert!(removed);
        assert_eq!(cache, vec![record(6, "b")]);
    }

    #[test]
    fn remove_by_id_missing_key_is_noop() {
        let mut cache = vec![record(5, "a"), record(6, "b")];
        let removed = remove_by_id(&mut cache, 42);
        assert!(!removed);
        assert_eq!(cache.len(), 2);
    }
}
