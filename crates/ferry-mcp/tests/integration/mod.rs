mod chat;
mod features;
mod http;
mod validation;
