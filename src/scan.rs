//! Whole-window scans. Every function here probes each integer of the window in
//! ascending order, so results come out sorted by integer and the lowest integer
//! wins any tie. Consecutive candidates are visited directly rather than through a
//! fresh batch walk each, keeping a scan linear in the window width.

use std::mem::{size_of, MaybeUninit};

use crate::{
    extract::Enumerator,
    probe::{probe_constant, Hit},
    window::{Bounds, Window},
};

// === Listing === //

/// First named value at or above `from`, with its integer.
const fn next_hit<E>(
    table: &[Enumerator<E>],
    window: Window,
    bounds: Bounds,
    from: i128,
) -> Option<(i128, Hit)> {
    let mut candidate = from;
    while candidate <= window.max() {
        if let Some(hit) = probe_constant(table, bounds, candidate) {
            return Some((candidate, hit));
        }
        candidate += 1;
    }
    None
}

pub const fn count<E>(table: &[Enumerator<E>], window: Window, bounds: Bounds) -> usize {
    let mut count = 0;
    let mut cursor = window.min();
    while let Some((integer, _)) = next_hit(table, window, bounds, cursor) {
        count += 1;
        cursor = integer + 1;
    }
    count
}

/// Probe results in ascending integer order. `N` must equal [`count`] for the same
/// arguments.
pub const fn hits<E, const N: usize>(
    table: &[Enumerator<E>],
    window: Window,
    bounds: Bounds,
) -> [Hit; N] {
    let mut hits = [Hit::PLACEHOLDER; N];
    let mut len = 0;
    let mut cursor = window.min();
    while let Some((integer, hit)) = next_hit(table, window, bounds, cursor) {
        assert!(len < N, "scan found more named values than were counted");
        hits[len] = hit;
        len += 1;
        cursor = integer + 1;
    }
    assert!(len == N, "scan found fewer named values than were counted");
    hits
}

// Unlike the `transmute` intrinsic, `insane_transmute` does not statically require
// `size_of::<A>()` to equal `size_of::<B>()`, which Rust cannot prove for
// `[MaybeUninit<T>; N]` and `[T; N]` with a generic `N`. The sizes are still checked
// when the function is evaluated.
const unsafe fn insane_transmute<A: Copy, B: Copy>(from: A) -> B {
    union Transmute<A: Copy, B: Copy> {
        from: A,
        to: B,
    }

    assert!(size_of::<A>() == size_of::<B>());

    // Safety: provided by caller
    unsafe { Transmute { from }.to }
}

pub const fn entries<E: Copy, const N: usize>(
    table: &[Enumerator<E>],
    hits: &[Hit; N],
) -> [(E, &'static str); N] {
    let mut out = [const { MaybeUninit::<(E, &'static str)>::uninit() }; N];

    let mut i = 0;
    while i < N {
        out[i] = MaybeUninit::new((table[hits[i].index].value, hits[i].name));
        i += 1;
    }

    // Safety: every slot was written above.
    unsafe { insane_transmute::<[MaybeUninit<(E, &'static str)>; N], [(E, &'static str); N]>(out) }
}

// === Name lookup === //

const fn names_match(left: &str, right: &str, ignore_case: bool) -> bool {
    let left = left.as_bytes();
    let right = right.as_bytes();
    if left.len() != right.len() {
        return false;
    }

    let mut i = 0;
    while i < left.len() {
        let (l, r) = if ignore_case {
            (left[i].to_ascii_lowercase(), right[i].to_ascii_lowercase())
        } else {
            (left[i], right[i])
        };
        if l != r {
            return false;
        }
        i += 1;
    }
    true
}

const fn find<E>(
    table: &[Enumerator<E>],
    window: Window,
    bounds: Bounds,
    name: &str,
    ignore_case: bool,
) -> Option<usize> {
    let mut cursor = window.min();
    while let Some((integer, hit)) = next_hit(table, window, bounds, cursor) {
        if names_match(hit.name, name, ignore_case) {
            return Some(hit.index);
        }
        cursor = integer + 1;
    }
    None
}

/// Declaration index of the enumerator spelled exactly `name`.
pub const fn find_name<E>(
    table: &[Enumerator<E>],
    window: Window,
    bounds: Bounds,
    name: &str,
) -> Option<usize> {
    find(table, window, bounds, name, false)
}

/// Like [`find_name`] but ASCII case-insensitive.
pub const fn find_name_ignore_case<E>(
    table: &[Enumerator<E>],
    window: Window,
    bounds: Bounds,
    name: &str,
) -> Option<usize> {
    find(table, window, bounds, name, true)
}
