pub type Assign<T> = fn(&mut T, String);

// unset keys keep whatever Default produced, every setting here has one
pub fn load_from_env<T: Default + std::fmt::Debug>(keys: &[(&str, Assign<T>)]) -> T {
    log::trace!("loading env vars for: {}", std::any::type_name::<T>());

    let this = keys.iter().fold(T::default(), |mut this, (key, func)| {
        log::trace!("looking up {key}");
        match std::env::var(key) {
            Ok(val) => func(&mut this, val),
            Err(..) => log::trace!("key '{key}' was not set, keeping the default"),
        }
        this
    });

    log::debug!("created: {:?}", this);
    this
}

pub trait LoadFromEnv
where
    Self: Sized,
{
    fn load_from_env() -> Self;
}
