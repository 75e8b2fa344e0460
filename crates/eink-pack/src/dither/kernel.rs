//! Error diffusion kernel definitions.
//!
//! Each kernel is an explicit list of taps. A tap names a neighbor by its
//! offset from the current pixel and the share of the quantization error it
//! receives (`weight / divisor`). Row 0 taps only point forward (dx > 0);
//! later rows may reach both sides.

/// One error diffusion tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    /// Column offset, positive = right. Negated on right-to-left rows.
    pub dx: i32,
    /// Row offset, always >= 0.
    pub dy: i32,
    /// Numerator of the error share.
    pub weight: u8,
}

impl Tap {
    pub const fn new(dx: i32, dy: i32, weight: u8) -> Self {
        Self { dx, dy, weight }
    }
}

/// An error diffusion kernel.
///
/// The total error propagated is `sum(weights) / divisor`. All kernels here
/// propagate 100% except Atkinson (6/8).
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// Human readable name, used in logs.
    pub name: &'static str,
    pub taps: &'static [Tap],
    /// Each neighbor receives `error * weight / divisor`.
    pub divisor: u8,
    /// Whether the kernel is meant to be run with serpentine scanning.
    ///
    /// Callers that force a scan order (the binary gray path) ignore it.
    pub serpentine: bool,
}

impl Kernel {
    /// Sum of all tap weights.
    pub fn weight_sum(&self) -> u32 {
        self.taps.iter().map(|t| t.weight as u32).sum()
    }
}

/// Floyd-Steinberg.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    name: "floyd-steinberg",
    taps: &[
        Tap::new(1, 0, 7),  // right
        Tap::new(-1, 1, 3), // bottom-left
        Tap::new(0, 1, 5),  // bottom
        Tap::new(1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    serpentine: true,
};

/// "False" Floyd-Steinberg: three taps, cheaper, slightly coarser.
///
/// ```text
///    X   3
///    3   2
/// ```
pub const FALSE_FLOYD_STEINBERG: Kernel = Kernel {
    name: "false-floyd-steinberg",
    taps: &[Tap::new(1, 0, 3), Tap::new(0, 1, 3), Tap::new(1, 1, 2)],
    divisor: 8,
    serpentine: true,
};

/// Jarvis-Judice-Ninke.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    name: "jarvis",
    taps: &[
        Tap::new(1, 0, 7),
        Tap::new(2, 0, 5),
        Tap::new(-2, 1, 3),
        Tap::new(-1, 1, 5),
        Tap::new(0, 1, 7),
        Tap::new(1, 1, 5),
        Tap::new(2, 1, 3),
        Tap::new(-2, 2, 1),
        Tap::new(-1, 2, 3),
        Tap::new(0, 2, 5),
        Tap::new(1, 2, 3),
        Tap::new(2, 2, 1),
    ],
    divisor: 48,
    serpentine: true,
};

/// Stucki: JJN layout with sharper center weights.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    name: "stucki",
    taps: &[
        Tap::new(1, 0, 8),
        Tap::new(2, 0, 4),
        Tap::new(-2, 1, 2),
        Tap::new(-1, 1, 4),
        Tap::new(0, 1, 8),
        Tap::new(1, 1, 4),
        Tap::new(2, 1, 2),
        Tap::new(-2, 2, 1),
        Tap::new(-1, 2, 2),
        Tap::new(0, 2, 4),
        Tap::new(1, 2, 2),
        Tap::new(2, 2, 1),
    ],
    divisor: 42,
    serpentine: true,
};

/// Atkinson: only 6/8 of the error is propagated.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    name: "atkinson",
    taps: &[
        Tap::new(1, 0, 1),
        Tap::new(2, 0, 1),
        Tap::new(-1, 1, 1),
        Tap::new(0, 1, 1),
        Tap::new(1, 1, 1),
        Tap::new(0, 2, 1),
    ],
    divisor: 8,
    serpentine: true,
};

/// Burkes: the first two rows of Stucki.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: Kernel = Kernel {
    name: "burkes",
    taps: &[
        Tap::new(1, 0, 8),
        Tap::new(2, 0, 4),
        Tap::new(-2, 1, 2),
        Tap::new(-1, 1, 4),
        Tap::new(0, 1, 8),
        Tap::new(1, 1, 4),
        Tap::new(2, 1, 2),
    ],
    divisor: 32,
    serpentine: true,
};

/// Sierra (three rows).
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub const SIERRA: Kernel = Kernel {
    name: "sierra",
    taps: &[
        Tap::new(1, 0, 5),
        Tap::new(2, 0, 3),
        Tap::new(-2, 1, 2),
        Tap::new(-1, 1, 4),
        Tap::new(0, 1, 5),
        Tap::new(1, 1, 4),
        Tap::new(2, 1, 2),
        Tap::new(-1, 2, 2),
        Tap::new(0, 2, 3),
        Tap::new(1, 2, 2),
    ],
    divisor: 32,
    serpentine: true,
};

/// Two-row Sierra.
///
/// ```text
///            X   4   3
///    1   2   3   2   1
/// ```
pub const TWO_SIERRA: Kernel = Kernel {
    name: "two-sierra",
    taps: &[
        Tap::new(1, 0, 4),
        Tap::new(2, 0, 3),
        Tap::new(-2, 1, 1),
        Tap::new(-1, 1, 2),
        Tap::new(0, 1, 3),
        Tap::new(1, 1, 2),
        Tap::new(2, 1, 1),
    ],
    divisor: 16,
    serpentine: true,
};

/// Sierra Lite.
///
/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    name: "sierra-lite",
    taps: &[Tap::new(1, 0, 2), Tap::new(-1, 1, 1), Tap::new(0, 1, 1)],
    divisor: 4,
    serpentine: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&Kernel; 9] = [
        &FLOYD_STEINBERG,
        &FALSE_FLOYD_STEINBERG,
        &JARVIS_JUDICE_NINKE,
        &STUCKI,
        &ATKINSON,
        &BURKES,
        &SIERRA,
        &TWO_SIERRA,
        &SIERRA_LITE,
    ];

    #[test]
    fn test_full_propagation_kernels() {
        for k in ALL.iter().filter(|k| k.name != "atkinson") {
            assert_eq!(
                k.weight_sum(),
                k.divisor as u32,
                "{} should propagate 100% of error",
                k.name
            );
        }
    }

    #[test]
    fn test_atkinson_propagation_75_percent() {
        assert_eq!(ATKINSON.weight_sum(), 6);
        assert_eq!(ATKINSON.divisor, 8);
    }

    #[test]
    fn test_divisors() {
        let divisors: Vec<u8> = ALL.iter().map(|k| k.divisor).collect();
        assert_eq!(divisors, vec![16, 8, 48, 42, 8, 32, 32, 16, 4]);
    }

    #[test]
    fn test_taps_reach_at_most_two_rows() {
        for k in ALL {
            let reach = k.taps.iter().map(|t| t.dy).max().unwrap();
            assert!((1..=2).contains(&reach), "{} reaches {reach} rows", k.name);
        }
    }

    #[test]
    fn test_taps_are_causal() {
        // Row 0 only reaches forward; nothing points backward in rows.
        for k in ALL {
            for t in k.taps {
                assert!(t.dy >= 0, "{} has a tap above the current row", k.name);
                if t.dy == 0 {
                    assert!(t.dx > 0, "{} has a non-forward row 0 tap", k.name);
                }
            }
        }
    }

    #[test]
    fn test_tap_counts() {
        let counts: Vec<usize> = ALL.iter().map(|k| k.taps.len()).collect();
        assert_eq!(counts, vec![4, 3, 12, 12, 6, 7, 10, 7, 3]);
    }
}
