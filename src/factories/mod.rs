pub mod serializer_factory;
