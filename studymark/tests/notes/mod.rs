mod modes;
mod serializer;
