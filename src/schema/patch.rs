use serde::{Deserialize, Deserializer};

/// A field on an update request. A key missing from the payload is `Absent`
/// and leaves the stored value alone; anything else is `Present`.
///
/// `Patch<Option<T>>` keeps an explicit `null` as `Present(None)`. Fields whose
/// stored value cannot be null use [`null_as_absent`] instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T>{
    #[default]
    Absent,
    Present(T),
}

impl<T> Patch<T>{
    pub fn is_present(&self) -> bool{
        matches!(self, Patch::Present(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U>{
        match self {
            Patch::Present(value) => Patch::Present(f(value)),
            Patch::Absent => Patch::Absent,
        }
    }

    /// Overwrites `target` when present.
    pub fn apply_to(self, target: &mut T){
        if let Patch::Present(value) = self{
            *target = value;
        }
    }
}

impl<T> From<Option<T>> for Patch<T>{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Present(value),
            None => Patch::Absent,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T>{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Present)
    }
}

/// `deserialize_with` helper: JSON `null` reads as `Absent`.
pub fn null_as_absent<'de, D, T>(deserializer: D) -> Result<Patch<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.into())
}

#[cfg(test)]
mod tests{
    use super::*;

    #[derive(Deserialize)]
    struct Payload{
        #[serde(default)]
        nullable: Patch<Option<String>>,
        #[serde(default, deserialize_with = "null_as_absent")]
        flag: Patch<bool>,
    }

    #[test]
    fn test_missing_keys_are_absent(){
        let payload: Payload = serde_json::from_str("{}").unwrap();

        assert_eq!(payload.nullable, Patch::Absent);
        assert_eq!(payload.flag, Patch::Absent);
    }

    #[test]
    fn test_explicit_null_on_nullable_field_is_present(){
        let payload: Payload = serde_json::from_str(r#"{"nullable": null, "flag": null}"#).unwrap();

        assert_eq!(payload.nullable, Patch::Present(None));
        assert_eq!(payload.flag, Patch::Absent);
    }

    #[test]
    fn test_values_are_present(){
        let payload: Payload = serde_json::from_str(r#"{"nullable": "x", "flag": false}"#).unwrap();

        assert_eq!(payload.nullable, Patch::Present(Some("x".to_string())));
        assert_eq!(payload.flag, Patch::Present(false));
    }

    #[test]
    fn test_apply_to(){
        let mut title = Some("old".to_string());

        Patch::Absent.apply_to(&mut title);
        assert_eq!(title.as_deref(), Some("old"));

        Patch::Present(None).apply_to(&mut title);
        assert_eq!(title, None);
    }
}
