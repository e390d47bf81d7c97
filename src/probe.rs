use crate::{
    extract::{extract, Enumerator},
    window::{Bounds, Window},
};

/// Number of consecutive candidates covered by one step of the prober.
pub const BATCH: i128 = 8;

// === Hit === //

/// An integer the prober resolved to a name: the declaration index of the enumerator
/// that owns it and the extracted spelling.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Hit {
    pub index: usize,
    pub name: &'static str,
}

impl Hit {
    pub const PLACEHOLDER: Self = Self {
        index: 0,
        name: "",
    };
}

// === Prober === //

/// Runs the extractor on the single constant `integer`, ignoring any window. Aliases
/// resolve to the first declared enumerator.
pub const fn resolve<E>(table: &[Enumerator<E>], integer: i128) -> Option<Hit> {
    let mut index = 0;
    while index < table.len() {
        if table[index].integer == integer {
            return match extract(&table[index]) {
                Some(name) => Some(Hit { index, name }),
                None => None,
            };
        }
        index += 1;
    }
    None
}

/// [`resolve`] for a constant the representation can hold, `None` for any other.
pub const fn probe_constant<E>(
    table: &[Enumerator<E>],
    bounds: Bounds,
    constant: i128,
) -> Option<Hit> {
    // Never extract a value the representation cannot hold.
    if !bounds.contains(constant) {
        return None;
    }
    resolve(table, constant)
}

/// Name of `candidate` if it is a named value inside `window`.
///
/// The window is walked one batch of [`BATCH`] integers at a time starting at its
/// lower bound. Only the batch containing `candidate` consults the extractor; every
/// other batch costs a subtraction and a comparison. A candidate below the window
/// never lands in a batch, and one past the upper bound falls off the final batch.
pub const fn probe<E>(
    table: &[Enumerator<E>],
    window: Window,
    bounds: Bounds,
    candidate: i128,
) -> Option<Hit> {
    let mut batch_start = window.min();
    while batch_start <= window.max() {
        match candidate.checked_sub(batch_start) {
            Some(offset @ 0..=7) => {
                let constant = batch_start + offset;
                if constant > window.max() {
                    return None;
                }
                return probe_constant(table, bounds, constant);
            }
            _ => batch_start += BATCH,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[Enumerator<()>] = &[
        Enumerator::new((), -12, "Color::RED"),
        Enumerator::new((), 7, "Color::GREEN"),
        Enumerator::new((), 15, "Color::BLUE"),
        Enumerator::new((), 7, "Color::LIME"),
    ];

    const WINDOW: Window = Window::new(-120, 120);
    const BOUNDS: Bounds = Bounds::of::<i32>();

    fn name(candidate: i128) -> Option<&'static str> {
        probe(TABLE, WINDOW, BOUNDS, candidate).map(|hit| hit.name)
    }

    #[cfg(feature = "names")]
    #[test]
    fn resolves_named_values() {
        assert_eq!(name(-12), Some("RED"));
        assert_eq!(name(15), Some("BLUE"));
    }

    #[test]
    fn gaps_are_absent() {
        assert_eq!(name(0), None);
        assert_eq!(name(-11), None);
        assert_eq!(name(16), None);
    }

    #[cfg(feature = "names")]
    #[test]
    fn aliases_resolve_to_first_declared() {
        let hit = probe(TABLE, WINDOW, BOUNDS, 7).unwrap();
        assert_eq!(hit, Hit { index: 1, name: "GREEN" });
    }

    #[cfg(feature = "names")]
    #[test]
    fn window_bounds_are_inclusive() {
        const EDGES: &[Enumerator<()>] = &[
            Enumerator::new((), -120, "Dir::Left"),
            Enumerator::new((), 120, "Dir::Right"),
            Enumerator::new((), -121, "Dir::Under"),
            Enumerator::new((), 121, "Dir::Over"),
        ];

        let name = |c| probe(EDGES, WINDOW, BOUNDS, c).map(|hit| hit.name);
        assert_eq!(name(-120), Some("Left"));
        assert_eq!(name(120), Some("Right"));
        assert_eq!(name(-121), None);
        assert_eq!(name(121), None);
    }

    #[test]
    fn unrepresentable_candidates_are_absent() {
        const NEGATIVE: &[Enumerator<()>] = &[Enumerator::new((), -1, "Flag::Neg")];

        let bounds = Bounds::of::<u8>();
        assert_eq!(probe(NEGATIVE, Window::SIGNED, bounds, -1), None);
        assert_eq!(probe_constant(NEGATIVE, bounds, -1), None);
    }

    #[test]
    fn extreme_candidates_are_absent() {
        let bounds = Bounds::of::<i128>();
        assert_eq!(probe(TABLE, WINDOW, bounds, i128::MAX), None);
        assert_eq!(probe(TABLE, WINDOW, bounds, i128::MIN), None);
    }

    #[test]
    fn candidates_past_the_last_batch_are_absent() {
        const PAST: &[Enumerator<()>] = &[Enumerator::new((), 20, "Tail::Past")];

        let window = Window::new(0, 16);
        assert_eq!(probe(PAST, window, BOUNDS, 17), None);
        assert_eq!(probe(PAST, window, BOUNDS, 20), None);
        assert_eq!(probe(PAST, window, BOUNDS, -3), None);
    }

    #[cfg(feature = "names")]
    #[test]
    fn probes_at_compile_time() {
        const BLUE: Option<Hit> = probe(TABLE, WINDOW, BOUNDS, 15);
        assert_eq!(BLUE.map(|hit| hit.index), Some(2));
    }
}
