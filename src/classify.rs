const FIZZ_DIVISOR: i64 = 3;
const BUZZ_DIVISOR: i64 = 5;

/// Returns the text for `num` according to the rules of FizzBuzz.
///
/// "Fizz" is appended when `num` is divisible by 3, then "Buzz" when it is
/// divisible by 5. The checks are additive, so 15 yields "FizzBuzz". When
/// neither divisor matches, the result is the decimal representation of
/// `num` itself.
pub fn fizz_buzz(num: i64) -> String {
    let mut text = String::new();
    if num % FIZZ_DIVISOR == 0 {
        text.push_str("Fizz");
    }
    if num % BUZZ_DIVISOR == 0 {
        text.push_str("Buzz");
    }
    if text.is_empty() {
        text = num.to_string();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiples_of_three_fizz() {
        assert_eq!(fizz_buzz(3), "Fizz");
        assert_eq!(fizz_buzz(9), "Fizz");
        assert_eq!(fizz_buzz(33), "Fizz");
    }

    #[test]
    fn multiples_of_five_buzz() {
        assert_eq!(fizz_buzz(5), "Buzz");
        assert_eq!(fizz_buzz(10), "Buzz");
    }

    #[test]
    fn multiples_of_both_fizzbuzz() {
        assert_eq!(fizz_buzz(15), "FizzBuzz");
        assert_eq!(fizz_buzz(45), "FizzBuzz");
    }

    #[test]
    fn other_numbers_print_themselves() {
        assert_eq!(fizz_buzz(1), "1");
        assert_eq!(fizz_buzz(7), "7");
    }

    #[test]
    fn text_matches_divisibility() {
        for n in 1..=100 {
            let text = fizz_buzz(n);
            assert_eq!(text.contains("Fizz"), n % 3 == 0);
            assert_eq!(text.contains("Buzz"), n % 5 == 0);
            if n % 3 != 0 && n % 5 != 0 {
                assert_eq!(text, n.to_string());
            }
        }
    }
}
