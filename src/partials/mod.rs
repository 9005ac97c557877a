pub(crate) mod about;
pub(crate) mod head;
pub(crate) mod layout;
pub(crate) mod navbar;
