//! Splitting a requested amount into item stacks

/// How many stacks of which size a spawn produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackPlan {
    full_stacks: u32,
    stack_size: u32,
    remainder: u32,
}

impl StackPlan {
    /// Split `amount` into stacks of at most `max_stack`.
    ///
    /// Host data sometimes reports a max stack below one; that is treated
    /// as one.
    pub fn split(amount: u32, max_stack: i32) -> Self {
        let stack_size = if max_stack < 1 { 1 } else { max_stack as u32 };
        Self {
            full_stacks: amount / stack_size,
            stack_size,
            remainder: amount % stack_size,
        }
    }

    /// One stack holding the whole amount
    pub fn single(amount: u32) -> Self {
        Self {
            full_stacks: 1,
            stack_size: amount,
            remainder: 0,
        }
    }

    /// `amount` stacks of one
    pub fn singles(amount: u32) -> Self {
        Self::split(amount, 1)
    }

    /// Number of stacks
    pub fn stack_count(&self) -> usize {
        self.full_stacks as usize + usize::from(self.remainder != 0)
    }

    /// Stack sizes, full stacks first
    pub fn stacks(&self) -> impl Iterator<Item = u32> {
        let size = self.stack_size;
        let remainder = self.remainder;
        (0..self.full_stacks)
            .map(move |_| size)
            .chain((remainder != 0).then_some(remainder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_remainder() {
        let plan = StackPlan::split(23, 10);
        assert_eq!(plan.stacks().collect::<Vec<_>>(), vec![10, 10, 3]);
        assert_eq!(plan.stack_count(), 3);
    }

    #[test]
    fn test_split_exact() {
        assert_eq!(StackPlan::split(40, 20).stacks().collect::<Vec<_>>(), vec![20, 20]);
    }

    #[test]
    fn test_split_below_one_stack() {
        assert_eq!(StackPlan::split(7, 50).stacks().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_zero_max_stack_means_singles() {
        assert_eq!(StackPlan::split(5, 0).stacks().collect::<Vec<_>>(), vec![1; 5]);
        assert_eq!(StackPlan::split(2, -1).stack_count(), 2);
    }

    #[test]
    fn test_single() {
        assert_eq!(StackPlan::single(500).stacks().collect::<Vec<_>>(), vec![500]);
    }

    #[test]
    fn test_sum_is_preserved() {
        for (amount, max) in [(1, 1), (99, 7), (100, 100), (3, 0), (1000, 999)] {
            let total: u32 = StackPlan::split(amount, max).stacks().sum();
            assert_eq!(total, amount, "amount {} max {}", amount, max);
        }
    }
}
