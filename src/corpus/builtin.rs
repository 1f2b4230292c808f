//! A small embedded English sample, used when no corpus file is given.

use crate::corpus::tokenizer::tokenize;
use crate::spelling::frequency::FrequencyModel;

const SAMPLE_TEXT: &str = "\
The spelling of a word is the order of the letters that make it up. When people \
write quickly they often make small mistakes: a letter is left out, two letters \
are swapped, one letter is typed in place of another, or an extra letter slips \
in. A good spelling checker looks at the words that are close to what was typed \
and offers the ones that people actually use. Common words such as the, and, \
that, with, have, this, from, they, would, there, their, which, about, could, \
people, other, after, first, because, these and those appear again and again \
in ordinary writing, so they should be offered before rare words. The news \
this morning said the city council would meet again next week to talk about \
the new library, the school budget and the water system. Some members of the \
council want more time to think about the plan before they vote. Others say the \
people of the city have waited long enough and the work should begin this \
year. A report from the committee will be made public before the meeting. \
Reading, writing and spelling are taught in every school, and the teachers \
believe that practice with real sentences helps children remember how words \
are written. When a word is spelled correctly the checker should leave it \
alone and say that it is already the most likely word.";

/// Frequency model built from the embedded sample text.
pub fn builtin_sample() -> FrequencyModel {
    FrequencyModel::from_tokens(tokenize(SAMPLE_TEXT))
}
