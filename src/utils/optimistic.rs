// ============================================================================
// OPTIMISTIC UPDATE - Snapshot del valor previo + revert si falla
// ============================================================================
// Aplica el cambio localmente antes de la confirmación del servidor.
// Si la llamada de confirmación falla, restaura el snapshot.
// ============================================================================

pub struct OptimisticUpdate<T, F>
where
    T: Clone,
    F: Fn(T),
{
    previous: Option<T>,
    apply: F,
}

impl<T, F> OptimisticUpdate<T, F>
where
    T: Clone,
    F: Fn(T),
{
    /// Aplica el valor nuevo de inmediato y recuerda el anterior
    pub fn apply(previous: T, next: T, apply: F) -> Self {
        apply(next);
        Self {
            previous: Some(previous),
            apply,
        }
    }

    /// La confirmación falló: restaura el valor previo
    pub fn revert(mut self) {
        if let Some(previous) = self.previous.take() {
            (self.apply)(previous);
        }
    }

    /// La confirmación llegó: descarta el snapshot
    pub fn commit(mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn revert_restaura_el_valor_previo() {
        let value = Rc::new(RefCell::new(1));
        let setter = {
            let value = value.clone();
            move |v: i32| *value.borrow_mut() = v
        };

        let update = OptimisticUpdate::apply(1, 2, setter);
        assert_eq!(*value.borrow(), 2);

        update.revert();
        assert_eq!(*value.borrow(), 1);
    }

    #[test]
    fn commit_conserva_el_valor_nuevo() {
        let value = Rc::new(RefCell::new(false));
        let setter = {
            let value = value.clone();
            move |v: bool| *value.borrow_mut() = v
        };

        let update = OptimisticUpdate::apply(false, true, setter);
        update.commit();
        assert!(*value.borrow());
    }
}
