//! Dice roll notation: `2d6+3`, `max:2d20`, `dropL:4d6+2`, `d12+3-d8`...

pub mod challenge;
pub mod dice;
pub mod error;
mod evaluator;
mod parser;
pub mod prefix;
pub mod roll;
pub mod sampler;
pub mod set;
pub mod solver;
pub mod template;
pub mod validator;

/// Check that `text` is a roll expression, prefixes are not part of the grammar
pub fn validate(text: &str) -> bool {
    validator::is_valid(text)
}

/// Roll `text` with a fresh sampler seeded from the clock
pub fn evaluate(text: &str) -> error::Result<roll::Result> {
    solver::Solver::new(text).solve()
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::roll::Source;
    use crate::sampler::Sampler;
    use crate::solver::Solver;
    use proptest::prelude::*;

    pub struct MockIter<'a, T: Iterator<Item = i64>> {
        pub iter: &'a mut T,
    }

    impl<T: Iterator<Item = i64>> Source for MockIter<'_, T> {
        fn range(&mut self, min: i64, max: i64) -> i64 {
            match self.iter.next() {
                Some(value) => {
                    if value < min || value > max {
                        panic!("Tried to return {} for a [{}, {}] range", value, min, max)
                    }
                    value
                }
                None => panic!("Iterator out of values"),
            }
        }
    }

    fn solve(expression: &str, rolls: Vec<i64>) -> crate::error::Result<crate::roll::Result> {
        Solver::new(expression).solve_with_source(&mut MockIter {
            iter: &mut rolls.into_iter(),
        })
    }

    #[test]
    fn one_dice_test() {
        let res = solve("d20", vec![8]).unwrap();
        assert_eq!(vec![8], res.get_rolls());
        assert_eq!(8, res.get_total());
    }

    #[test]
    fn modifier_test() {
        assert_eq!(14, solve("2d6+3", vec![5, 6]).unwrap().get_total());
        assert_eq!(8, solve("2d6-3", vec![5, 6]).unwrap().get_total());
        assert_eq!(11, solve("2d6+", vec![5, 6]).unwrap().get_total());
        assert_eq!(11, solve("2d6-", vec![5, 6]).unwrap().get_total());
    }

    #[test]
    fn zero_dice_test() {
        let res = solve("0d4+8", Vec::new()).unwrap();
        assert!(res.get_rolls().is_empty());
        assert_eq!(8, res.get_total());

        let res = crate::evaluate("0d4+8").unwrap();
        assert!(res.get_rolls().is_empty());
        assert_eq!(8, res.get_total());
    }

    #[test]
    fn invalid_test() {
        for expression in ["heyo", "-2d6", "2d20+1+", "", "max:", "max:2d20+1d6", "min:d4-d4"] {
            assert_eq!(
                Err(Error::invalid(expression)),
                crate::evaluate(expression),
                "{expression}"
            );
        }
    }

    #[test]
    fn max_min_test() {
        assert_eq!(17, solve("max:4d20", vec![5, 1, 17, 9]).unwrap().get_total());
        assert_eq!(1, solve("min:4d20", vec![5, 1, 17, 9]).unwrap().get_total());
        assert_eq!(19, solve("max:4d20+2", vec![5, 1, 17, 9]).unwrap().get_total());
        assert_eq!(-1, solve("min:4d20-2", vec![5, 1, 17, 9]).unwrap().get_total());

        let res = solve("max:4d20", vec![5, 1, 17, 9]).unwrap();
        assert_eq!(vec![5, 1, 17, 9], res.get_rolls());
    }

    #[test]
    fn max_zero_dice_test() {
        assert_eq!(3, solve("max:0d20+3", Vec::new()).unwrap().get_total());
        assert_eq!(0, solve("min:0d20", Vec::new()).unwrap().get_total());
    }

    #[test]
    fn drop_lowest_test() {
        let res = solve("dropL:4d6+2", vec![3, 6, 1, 4]).unwrap();
        assert_eq!(4, res.get_rolls().len());
        assert_eq!(3 + 6 + 1 + 4 + 2 - 1, res.get_total());
    }

    #[test]
    fn drop_highest_test() {
        assert_eq!(8, solve("dropH:4d6", vec![3, 6, 1, 4]).unwrap().get_total());
    }

    #[test]
    fn drop_only_primary_test() {
        // the secondary 1 is not dropped, the primary 2 is
        let res = solve("dropL:2d6+1d6", vec![2, 5, 1]).unwrap();
        assert_eq!(vec![2, 5, 1], res.get_rolls());
        assert_eq!(6, res.get_total());
    }

    #[test]
    fn drop_zero_dice_test() {
        assert_eq!(1, solve("dropH:0d6+1d1", vec![1]).unwrap().get_total());
        assert_eq!(3, solve("dropL:0d6+3", Vec::new()).unwrap().get_total());
    }

    #[test]
    fn double_test() {
        let res = solve("dub:3d8", vec![2, 7, 8]).unwrap();
        assert_eq!(34, res.get_total());
    }

    #[test]
    fn half_test() {
        assert_eq!(1, solve("half:1d1+2", vec![1]).unwrap().get_total());
        assert_eq!(-1, solve("half:d1-4", vec![1]).unwrap().get_total());
        assert_eq!(5, solve("half:2d6", vec![6, 5]).unwrap().get_total());
    }

    #[test]
    fn half_after_pair_test() {
        // (4 + 3) - (2 + 1) = 4, halved
        assert_eq!(2, solve("half:1d4+3-1d2+1", vec![4, 2]).unwrap().get_total());
    }

    #[test]
    fn pair_test() {
        let res = solve("1d12+3+1d8", vec![10, 7]).unwrap();
        assert_eq!(vec![10, 7], res.get_rolls());
        assert_eq!(20, res.get_total());

        let res = solve("d12+3-d8", vec![10, 7]).unwrap();
        assert_eq!(6, res.get_total());

        let res = solve("2d6+1d8", vec![1, 2, 8]).unwrap();
        assert_eq!(vec![1, 2, 8], res.get_rolls());
        assert_eq!(11, res.get_total());
    }

    #[test]
    fn pair_modifiers_test() {
        // 6 - 2 - (3 + 4)
        assert_eq!(-3, solve("1d6-2-1d4+4", vec![6, 3]).unwrap().get_total());
    }

    #[test]
    fn zero_sides_test() {
        let res = solve("3d0+1", Vec::new()).unwrap();
        assert_eq!(vec![0, 0, 0], res.get_rolls());
        assert_eq!(1, res.get_total());
    }

    #[test]
    fn overflow_test() {
        assert!(matches!(
            crate::evaluate("1d1+9223372036854775807"),
            Err(Error::InvalidExpression(_))
        ));
        assert!(matches!(
            crate::evaluate("1d6+99999999999999999999"),
            Err(Error::InvalidExpression(_))
        ));
    }

    #[test]
    fn too_many_dice_test() {
        assert_eq!(
            Err(Error::InvalidDieCount(9000000000000000000)),
            crate::evaluate("9000000000000000000d6")
        );
        assert_eq!(
            Err(Error::InvalidDieCount(100000000000)),
            crate::evaluate("max:100000000000d20")
        );
        assert_eq!(
            Err(Error::InvalidDieCount(100000000000)),
            crate::evaluate("1d4+100000000000d6")
        );
        let res = crate::evaluate("100000d1").unwrap();
        assert_eq!(100000, res.get_total());
    }

    #[test]
    fn seeded_test() {
        let first = Solver::new("dropL:4d6+1d20").solve_with_source(&mut Sampler::new(17));
        let second = Solver::new("dropL:4d6+1d20").solve_with_source(&mut Sampler::new(17));
        assert_eq!(first, second);
    }

    #[test]
    fn solve_with_rng_test() {
        let mut rng = rand::thread_rng();
        let res = Solver::new("10d6").solve_with(&mut rng).unwrap();
        assert_eq!(10, res.get_rolls().len());
        assert!(res.get_rolls().iter().all(|r| (1..=6).contains(r)));
    }

    #[test]
    fn solver_is_valid_test() {
        assert!(Solver::new("max:2d20").is_valid());
        assert!(Solver::new("dropH:4d6+d4").is_valid());
        assert!(!Solver::new("max:2d20+1d6").is_valid());
        assert!(!Solver::new("max:max:2d20").is_valid());
        assert!(!Solver::new("heyo").is_valid());
        assert!(crate::validate("2d20"));
        assert!(!crate::validate("max:2d20"));
    }

    #[test]
    fn solver_prefix_test() {
        use crate::prefix::Prefix;
        assert_eq!(Prefix::DropHighest, Solver::new("dropH:4d6").prefix());
        assert_eq!(Prefix::None, Solver::new("4d6").prefix());
        assert_eq!("dub:3d8", Solver::new("dub:3d8").to_string());
    }

    proptest! {
        #[test]
        fn rolls_stay_in_range(seed in any::<u64>(), count in 1i64..40, sides in 1i64..100, modifier in 0i64..50) {
            let expression = format!("{count}d{sides}+{modifier}");
            let res = Solver::new(&expression)
                .solve_with_source(&mut Sampler::new(seed))
                .unwrap();
            prop_assert_eq!(count as usize, res.get_rolls().len());
            prop_assert!(res.get_rolls().iter().all(|r| (1..=sides).contains(r)));
            prop_assert_eq!(res.get_rolls().iter().sum::<i64>() + modifier, res.get_total());
        }

        #[test]
        fn validate_is_pure(text in "[0-9d+\\-:a-z]{0,12}") {
            prop_assert_eq!(crate::validate(&text), crate::validate(&text));
        }
    }
}
