//! Scroll position that sticks to the bottom until the user scrolls up.

#[derive(Debug, Clone)]
pub struct FollowScroll {
    offset: usize,
    follow: bool,
    /// Largest valid offset as of the last `resolve`.
    max: usize,
}

impl FollowScroll {
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow: true,
            max: 0,
        }
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    pub fn up(&mut self, n: usize) {
        self.offset = self.offset.min(self.max).saturating_sub(n);
        self.follow = self.offset >= self.max;
    }

    pub fn down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max);
        self.follow = self.offset >= self.max;
    }

    pub fn top(&mut self) {
        self.offset = 0;
        self.follow = self.max == 0;
    }

    pub fn bottom(&mut self) {
        self.follow = true;
    }

    /// First visible row for `total` rows in a viewport `height` rows tall.
    pub fn resolve(&mut self, total: usize, height: usize) -> usize {
        self.max = total.saturating_sub(height);
        if self.follow || self.offset > self.max {
            self.offset = self.max;
        }
        self.offset
    }
}

impl Default for FollowScroll {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_new_rows() {
        let mut s = FollowScroll::new();
        assert_eq!(s.resolve(5, 10), 0);
        assert_eq!(s.resolve(30, 10), 20);
        assert_eq!(s.resolve(31, 10), 21);
    }

    #[test]
    fn test_scrolling_up_stops_following() {
        let mut s = FollowScroll::new();
        s.resolve(30, 10);
        s.up(5);
        assert!(!s.is_following());
        assert_eq!(s.resolve(40, 10), 15);
    }

    #[test]
    fn test_reaching_bottom_resumes_following() {
        let mut s = FollowScroll::new();
        s.resolve(30, 10);
        s.up(2);
        s.down(2);
        assert!(s.is_following());
        assert_eq!(s.resolve(35, 10), 25);
    }

    #[test]
    fn test_top_then_bottom() {
        let mut s = FollowScroll::new();
        s.resolve(30, 10);
        s.top();
        assert_eq!(s.resolve(30, 10), 0);
        s.bottom();
        assert_eq!(s.resolve(30, 10), 20);
    }
}
