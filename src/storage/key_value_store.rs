use super::Error;

#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    ///
    /// Reads value stored under the key.
    ///
    /// ### Returns
    /// None when nothing is stored under the key
    ///
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    ///
    /// Stores value under the key replacing previous value
    ///
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    ///
    /// Removes value stored under the key.
    /// Removing missing key is not an error.
    ///
    fn remove(&self, key: &str) -> Result<(), Error>;
}
