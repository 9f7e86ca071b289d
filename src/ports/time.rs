use time::Date;

pub trait TimeProvider: Clone + Send + Sync + 'static {
    /// Today as a calendar date in the local timezone of the running process.
    fn today(&self) -> Date;
}
