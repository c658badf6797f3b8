mod code_generator_test;
mod question_answerer_test;
