//! Built-in material grade data (GB 50010-2010)
//!
//! Design strength values for normal-weight concrete C20 through C80 and
//! the common hot-rolled rebar grades. Stress-block coefficients alpha_1
//! and beta_1 are 1.0 and 0.8 up to C50, then interpolate linearly to
//! 0.94 and 0.74 at C80.

use super::{ConcreteProperties, RebarProperties};

/// Concrete design values, MPa (GB 50010 Table 4.1.4)
pub const CONCRETE_GRADES: &[(&str, ConcreteProperties)] = &[
    (
        "C20",
        ConcreteProperties {
            fcuk_mpa: 20.0,
            fc_mpa: 9.6,
            ft_mpa: 1.10,
            alpha1: 1.0,
            beta1: 0.8,
        },
    ),
    (
        "C25",
        ConcreteProperties {
            fcuk_mpa: 25.0,
            fc_mpa: 11.9,
            ft_mpa: 1.27,
            alpha1: 1.0,
            beta1: 0.8,
        },
    ),
    (
        "C30",
        ConcreteProperties {
            fcuk_mpa: 30.0,
            fc_mpa: 14.3,
            ft_mpa: 1.43,
            alpha1: 1.0,
            beta1: 0.8,
        },
    ),
    (
        "C35",
        ConcreteProperties {
            fcuk_mpa: 35.0,
            fc_mpa: 16.7,
            ft_mpa: 1.57,
            alpha1: 1.0,
            beta1: 0.8,
        },
    ),
    (
        "C40",
        ConcreteProperties {
            fcuk_mpa: 40.0,
            fc_mpa: 19.1,
            ft_mpa: 1.71,
            alpha1: 1.0,
            beta1: 0.8,
        },
    ),
    (
        "C45",
        ConcreteProperties {
            fcuk_mpa: 45.0,
            fc_mpa: 21.1,
            ft_mpa: 1.80,
            alpha1: 1.0,
            beta1: 0.8,
        },
    ),
    (
        "C50",
        ConcreteProperties {
            fcuk_mpa: 50.0,
            fc_mpa: 23.1,
            ft_mpa: 1.89,
            alpha1: 1.0,
            beta1: 0.8,
        },
    ),
    (
        "C55",
        ConcreteProperties {
            fcuk_mpa: 55.0,
            fc_mpa: 25.3,
            ft_mpa: 1.96,
            alpha1: 0.99,
            beta1: 0.79,
        },
    ),
    (
        "C60",
        ConcreteProperties {
            fcuk_mpa: 60.0,
            fc_mpa: 27.5,
            ft_mpa: 2.04,
            alpha1: 0.98,
            beta1: 0.78,
        },
    ),
    (
        "C65",
        ConcreteProperties {
            fcuk_mpa: 65.0,
            fc_mpa: 29.7,
            ft_mpa: 2.09,
            alpha1: 0.97,
            beta1: 0.77,
        },
    ),
    (
        "C70",
        ConcreteProperties {
            fcuk_mpa: 70.0,
            fc_mpa: 31.8,
            ft_mpa: 2.14,
            alpha1: 0.96,
            beta1: 0.76,
        },
    ),
    (
        "C75",
        ConcreteProperties {
            fcuk_mpa: 75.0,
            fc_mpa: 33.8,
            ft_mpa: 2.18,
            alpha1: 0.95,
            beta1: 0.75,
        },
    ),
    (
        "C80",
        ConcreteProperties {
            fcuk_mpa: 80.0,
            fc_mpa: 35.9,
            ft_mpa: 2.22,
            alpha1: 0.94,
            beta1: 0.74,
        },
    ),
];

/// Rebar design values, MPa (GB 50010 Tables 4.2.3 / 4.2.5)
pub const REBAR_GRADES: &[(&str, RebarProperties)] = &[
    (
        "HPB300",
        RebarProperties {
            es_mpa: 210_000.0,
            fy_mpa: 270.0,
        },
    ),
    (
        "HRB335",
        RebarProperties {
            es_mpa: 200_000.0,
            fy_mpa: 300.0,
        },
    ),
    (
        "HRB400",
        RebarProperties {
            es_mpa: 200_000.0,
            fy_mpa: 360.0,
        },
    ),
    (
        "HRBF400",
        RebarProperties {
            es_mpa: 200_000.0,
            fy_mpa: 360.0,
        },
    ),
    (
        "HRB500",
        RebarProperties {
            es_mpa: 200_000.0,
            fy_mpa: 435.0,
        },
    ),
    (
        "HRBF500",
        RebarProperties {
            es_mpa: 200_000.0,
            fy_mpa: 435.0,
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_nonempty_and_positive() {
        assert_eq!(CONCRETE_GRADES.len(), 13);
        assert_eq!(REBAR_GRADES.len(), 6);

        for (name, props) in CONCRETE_GRADES {
            assert!(!name.is_empty());
            assert!(props.fc_mpa > 0.0 && props.ft_mpa > 0.0);
            assert!(props.alpha1 <= 1.0 && props.beta1 <= 0.8);
        }
        for (_, props) in REBAR_GRADES {
            assert!(props.fy_mpa > 0.0 && props.es_mpa > 0.0);
        }
    }

    #[test]
    fn test_strength_ordering() {
        // fc and ft increase monotonically with grade
        for pair in CONCRETE_GRADES.windows(2) {
            assert!(pair[1].1.fc_mpa > pair[0].1.fc_mpa);
            assert!(pair[1].1.ft_mpa > pair[0].1.ft_mpa);
        }
    }
}
