//! Literal construction macro

/// Build an [`ObjectDict`](crate::ObjectDict) from `key => value` pairs.
///
/// Values go through `Into<Value>`, so literals of any supported type work.
///
/// # Example
///
/// ```
/// use objectdict::{objdict, Value};
///
/// let d = objdict! {
///     "name" => "ada",
///     "age" => 36,
///     "tags" => vec!["math", "engines"],
/// };
///
/// assert_eq!(d.attr("age").unwrap(), &Value::Int(36));
/// assert_eq!(d.len(), 3);
/// ```
#[macro_export]
macro_rules! objdict {
    () => {
        $crate::ObjectDict::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut dict = $crate::ObjectDict::new();
        $(
            dict.insert($key, $value);
        )+
        dict
    }};
}
