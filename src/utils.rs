use uuid::Uuid;

/// Source of ids for courses created without one.
pub trait IdGenerator: Send + Sync{
    fn next_id(&self) -> String;
}

pub struct UuidGenerator;

impl IdGenerator for UuidGenerator{
    fn next_id(&self) -> String{
        Uuid::new_v4().to_string()
    }
}

/// Hands out `{prefix}-1`, `{prefix}-2`, ...
#[cfg(test)]
pub struct SequentialIdGenerator{
    prefix: String,
    counter: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl SequentialIdGenerator{
    pub fn new(prefix: &str) -> Self{
        SequentialIdGenerator{prefix: prefix.to_string(), counter: std::sync::atomic::AtomicU64::new(0)}
    }
}

#[cfg(test)]
impl IdGenerator for SequentialIdGenerator{
    fn next_id(&self) -> String{
        let n = self.counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}
