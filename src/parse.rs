use std::str::FromStr;

/// Parses the argument at `pos` into a value of type `T`.
///
/// The entire token has to be consumed by the parse. Trailing characters
/// after the numeric portion (like "5abc") make the parse fail, they are
/// never silently truncated away. Returns `None` when `pos` is outside the
/// argument list or the token does not parse.
pub fn parse_arg<T: FromStr>(args: &[String], pos: usize) -> Option<T> {
    args.get(pos)?.parse().ok()
}

/// Extracts the upper bound from the argument at `pos`.
///
/// Values that are zero or negative are rejected the same way as a failed
/// parse.
pub fn upper_bound(args: &[String], pos: usize) -> Option<i64> {
    parse_arg::<i64>(args, pos).filter(|&n| n > 0)
}
