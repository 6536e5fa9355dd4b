pub(crate) mod output_format;
