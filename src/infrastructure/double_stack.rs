/// Two LIFO stacks sharing one fixed-capacity buffer: the front grows up from
/// slot 0, the back grows down from the end.
///
/// Pushing past the combined capacity is a caller bug and panics on the
/// buffer index.
#[derive(Debug, Clone)]
pub struct DoubleStack {
    items: Vec<usize>,
    fp: usize,
    bp: usize,
}

impl DoubleStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: vec![0; capacity],
            fp: 0,
            bp: capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty_front(&self) -> bool {
        self.fp == 0
    }

    pub fn top_front(&self) -> Option<usize> {
        self.fp.checked_sub(1).map(|i| self.items[i])
    }

    pub fn push_front(&mut self, item: usize) {
        debug_assert!(self.fp < self.bp, "double stack overflow");
        self.items[self.fp] = item;
        self.fp += 1;
    }

    pub fn pop_front(&mut self) -> Option<usize> {
        let item = self.top_front()?;
        self.fp -= 1;
        Some(item)
    }

    pub fn is_empty_back(&self) -> bool {
        self.bp == self.items.len()
    }

    pub fn top_back(&self) -> Option<usize> {
        if self.is_empty_back() {
            None
        } else {
            Some(self.items[self.bp])
        }
    }

    pub fn push_back(&mut self, item: usize) {
        debug_assert!(self.fp < self.bp, "double stack overflow");
        self.bp -= 1;
        self.items[self.bp] = item;
    }

    pub fn pop_back(&mut self) -> Option<usize> {
        let item = self.top_back()?;
        self.bp += 1;
        Some(item)
    }
}
