use lazy_static::lazy_static;
use ndarray::{Array2, ArrayView1};
use regex::Regex;
use std::collections::{HashMap, HashSet};

lazy_static! {
    // Tokens are runs of two or more word characters.
    static ref TOKEN_PATTERN: Regex = Regex::new(r"\b\w\w+\b").unwrap();

    /// Common English stop words excluded from the vocabulary
    static ref ENGLISH_STOP_WORDS: HashSet<&'static str> = [
        "about", "above", "across", "after", "again", "against", "all", "almost",
        "alone", "along", "already", "also", "although", "always", "among", "an",
        "and", "another", "any", "anyone", "anything", "anywhere", "are", "around",
        "as", "at", "back", "be", "became", "because", "become", "becomes", "been",
        "before", "behind", "being", "below", "between", "both", "but", "by", "can",
        "cannot", "could", "did", "do", "does", "done", "down", "during", "each",
        "either", "else", "enough", "even", "ever", "every", "everyone",
        "everything", "everywhere", "few", "find", "first", "for", "found", "from",
        "further", "get", "give", "go", "had", "has", "have", "he", "hence", "her",
        "here", "hers", "herself", "him", "himself", "his", "how", "however", "if",
        "in", "indeed", "into", "is", "it", "its", "itself", "just", "last",
        "least", "less", "may", "me", "might", "more", "most", "mostly", "much",
        "must", "my", "myself", "namely", "neither", "never", "nevertheless",
        "next", "no", "nobody", "none", "nor", "not", "nothing", "now", "nowhere",
        "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
        "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
        "per", "perhaps", "put", "rather", "same", "seem", "seemed", "seeming",
        "seems", "several", "she", "should", "since", "so", "some", "somehow",
        "someone", "something", "sometime", "sometimes", "somewhere", "still",
        "such", "than", "that", "the", "their", "theirs", "them", "themselves",
        "then", "thence", "there", "thereafter", "thereby", "therefore", "these",
        "they", "this", "those", "though", "through", "throughout", "thus", "to",
        "together", "too", "toward", "towards", "under", "until", "up", "upon",
        "us", "very", "was", "we", "well", "were", "what", "whatever", "when",
        "whence", "whenever", "where", "whereas", "wherever", "whether", "which",
        "while", "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
        "within", "without", "would", "yet", "you", "your", "yours", "yourself",
        "yourselves",
    ]
    .into_iter()
    .collect();
}

/// Term-weighted sparse-ish vectorizer over a document collection.
///
/// Term frequency is the raw in-document count, IDF is smoothed
/// (`ln((1 + n) / (1 + df)) + 1`), and every row is L2-normalized, so the
/// cosine similarity of two documents is the dot product of their rows.
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    fn tokenize(document: &str) -> Vec<String> {
        let lowered = document.to_lowercase();
        TOKEN_PATTERN
            .find_iter(&lowered)
            .map(|token| token.as_str())
            .filter(|token| !ENGLISH_STOP_WORDS.contains(token))
            .map(|token| token.to_string())
            .collect()
    }

    /// Builds the vocabulary and IDF weights over `documents` and returns the
    /// weighted, row-normalized document-term matrix.
    pub fn fit_transform(&mut self, documents: &[String]) -> Array2<f32> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|document| Self::tokenize(document))
            .collect();

        self.vocabulary.clear();
        let mut document_frequency: Vec<usize> = Vec::new();

        for tokens in &tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for token in unique {
                match self.vocabulary.get(token.as_str()) {
                    Some(&index) => document_frequency[index] += 1,
                    None => {
                        self.vocabulary.insert(token.clone(), self.vocabulary.len());
                        document_frequency.push(1);
                    }
                }
            }
        }

        let n_documents = documents.len() as f32;
        self.idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_documents) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let mut matrix = Array2::<f32>::zeros((documents.len(), self.vocabulary.len()));
        for (row, tokens) in tokenized.iter().enumerate() {
            for token in tokens {
                if let Some(&index) = self.vocabulary.get(token.as_str()) {
                    matrix[[row, index]] += 1.0;
                }
            }
            for index in 0..self.idf.len() {
                matrix[[row, index]] *= self.idf[index];
            }
            normalize_row(&mut matrix, row);
        }

        matrix
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_row(matrix: &mut Array2<f32>, row: usize) {
    let norm = matrix
        .row(row)
        .iter()
        .map(|value| value * value)
        .sum::<f32>()
        .sqrt();
    if norm > 0.0 {
        matrix.row_mut(row).mapv_inplace(|value| value / norm);
    }
}

/// Cosine similarity between two term vectors. Zero-magnitude vectors
/// compare as 0 rather than NaN.
pub fn cosine_similarity(a: ArrayView1<'_, f32>, b: ArrayView1<'_, f32>) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
