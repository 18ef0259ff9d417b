//! Books and an immutable recursive list of books.
//!
//! `BookList` is a cons list: every operation returns a new list and leaves
//! the receiver untouched. Tails are reference counted so a list can be
//! extended at the front without copying it.

use std::fmt;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    title: String,
    author: String,
    year: i32,
    price: f32,
}

impl Book {
    pub fn new(title: &str, author: &str, year: i32, price: f32) -> Self {
        Self {
            title: title.to_owned(),
            author: author.to_owned(),
            year,
            price,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn price(&self) -> f32 {
        self.price
    }

    /// Published strictly before `year`.
    pub fn before(&self, year: i32) -> bool {
        self.year < year
    }

    pub fn cheaper_than(&self, other: &Book) -> bool {
        self.price < other.price
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {} Author: {} Year: {} Price: {:.2}",
            self.title, self.author, self.year, self.price
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum BookList {
    #[default]
    Empty,
    Element(Book, Rc<BookList>),
}

impl BookList {
    pub fn new() -> Self {
        BookList::Empty
    }

    /// A new list with `book` in front of this one. The tail is shared.
    pub fn prepend(self: &Rc<Self>, book: Book) -> BookList {
        BookList::Element(book, Rc::clone(self))
    }

    pub fn count(&self) -> usize {
        match self {
            BookList::Empty => 0,
            BookList::Element(_, rest) => 1 + rest.count(),
        }
    }

    pub fn total_price(&self) -> f32 {
        match self {
            BookList::Empty => 0.0,
            BookList::Element(book, rest) => book.price() + rest.total_price(),
        }
    }

    /// The books published before `year`, in their original order.
    pub fn all_before(&self, year: i32) -> BookList {
        match self {
            BookList::Empty => BookList::Empty,
            BookList::Element(book, rest) if book.before(year) => {
                BookList::Element(book.clone(), Rc::new(rest.all_before(year)))
            }
            BookList::Element(_, rest) => rest.all_before(year),
        }
    }

    /// A new list with `book` appended after the last element.
    pub fn add_at_end(&self, book: Book) -> BookList {
        match self {
            BookList::Empty => BookList::Element(book, Rc::new(BookList::Empty)),
            BookList::Element(first, rest) => {
                BookList::Element(first.clone(), Rc::new(rest.add_at_end(book)))
            }
        }
    }

    pub fn iter(&self) -> BookListIter<'_> {
        BookListIter { node: self }
    }
}

pub struct BookListIter<'a> {
    node: &'a BookList,
}

impl<'a> Iterator for BookListIter<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        match self.node {
            BookList::Empty => None,
            BookList::Element(book, rest) => {
                self.node = rest.as_ref();
                Some(book)
            }
        }
    }
}

impl fmt::Display for BookList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, book) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{book}")?;
        }
        Ok(())
    }
}
