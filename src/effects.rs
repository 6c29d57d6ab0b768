pub(crate) mod composite;
pub(crate) mod mask;
pub(crate) mod poster;
pub(crate) mod rounded;
