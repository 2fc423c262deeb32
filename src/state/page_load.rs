/// Fetch lifecycle of a page's primary resource.
///
/// A page mounts in `Loading`, and the single read it issues moves it to
/// `Ready` or `Failed`. There is no automatic retry out of `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoad<T> {
    Loading,
    Ready(T),
    Failed,
}

impl<T> Default for PageLoad<T> {
    fn default() -> Self {
        PageLoad::Loading
    }
}

impl<T> PageLoad<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageLoad::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PageLoad::Failed)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageLoad::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            PageLoad::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_accessors() {
        let mut load: PageLoad<u8> = PageLoad::default();
        assert!(load.is_loading());
        assert!(load.ready().is_none());

        load = PageLoad::Ready(3);
        if let Some(v) = load.ready_mut() {
            *v += 1;
        }
        assert_eq!(load.ready(), Some(&4));

        load = PageLoad::Failed;
        assert!(load.is_failed());
        assert!(!load.is_loading());
    }
}
