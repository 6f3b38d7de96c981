/// Value container standing in for a stub property.
///
/// The holder supports read and write, and converts from its value type
/// so assigning a stub property reads like plain-field assignment:
///
/// ```
/// use understudy_wrappers::ValueHolder;
///
/// let mut title: ValueHolder<String> = "untitled".to_string().into();
/// title.set("renamed".to_string());
/// assert_eq!(title.get(), "renamed");
/// ```
///
/// Before any write the holder carries the value type's default, which is
/// what a stub property returns until the consuming test assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueHolder<T> {
    value: T,
}

impl<T> ValueHolder<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Replace the held value
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Borrowing view of the held value
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> ValueHolder<T> {
    /// Read the held value out
    pub fn get(&self) -> T {
        self.value.clone()
    }
}

impl<T> From<T> for ValueHolder<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_holder_reads_the_default() {
        let holder: ValueHolder<i32> = ValueHolder::default();
        assert_eq!(holder.get(), 0);

        let holder: ValueHolder<String> = ValueHolder::default();
        assert_eq!(holder.get(), "");

        let holder: ValueHolder<Option<u8>> = ValueHolder::default();
        assert_eq!(holder.get(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut holder = ValueHolder::default();
        holder.set(7);
        assert_eq!(holder.get(), 7);
    }

    #[test]
    fn test_conversion_from_value() {
        let holder: ValueHolder<i32> = 5.into();
        assert_eq!(holder.get(), 5);
    }

    #[test]
    fn test_last_write_wins() {
        let mut holder = ValueHolder::new("first".to_string());
        holder.set("second".to_string());
        holder.set("third".to_string());
        assert_eq!(holder.value(), "third");
    }
}
