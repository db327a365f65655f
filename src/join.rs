//! Fan-in combinators gathering several independently-owned futures into a
//! single future of a tuple. Not part of the core precursor/continuation
//! machinery — built entirely out of `Future::then`/`Future::then_async`,
//! the same way the upstream `join2..join12` family was built out of
//! `and_thenf`/`map`.

use crate::error::HandlerPanic;
use crate::future::Future;

pub fn join2<A, B, ERR>(fa: Future<A, ERR>, fb: Future<B, ERR>) -> Future<(A, B), ERR>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    ERR: Clone + Send + 'static + From<HandlerPanic>,
{
    fa.then_async(move |a| fb.then(move |b| (a, b)))
}

pub fn join3<A, B, C, ERR>(
    fa: Future<A, ERR>,
    fb: Future<B, ERR>,
    fc: Future<C, ERR>,
) -> Future<(A, B, C), ERR>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    ERR: Clone + Send + 'static + From<HandlerPanic>,
{
    fa.then_async(move |a| fb.then_async(move |b| fc.then(move |c| (a, b, c))))
}

pub fn join4<A, B, C, D, ERR>(
    fa: Future<A, ERR>,
    fb: Future<B, ERR>,
    fc: Future<C, ERR>,
    fd: Future<D, ERR>,
) -> Future<(A, B, C, D), ERR>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    ERR: Clone + Send + 'static + From<HandlerPanic>,
{
    fa.then_async(move |a| {
        fb.then_async(move |b| fc.then_async(move |c| fd.then(move |d| (a, b, c, d))))
    })
}

pub fn join5<A, B, C, D, E, ERR>(
    fa: Future<A, ERR>,
    fb: Future<B, ERR>,
    fc: Future<C, ERR>,
    fd: Future<D, ERR>,
    fe: Future<E, ERR>,
) -> Future<(A, B, C, D, E), ERR>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    E: Clone + Send + 'static,
    ERR: Clone + Send + 'static + From<HandlerPanic>,
{
    fa.then_async(move |a| {
        fb.then_async(move |b| {
            fc.then_async(move |c| fd.then_async(move |d| fe.then(move |e| (a, b, c, d, e))))
        })
    })
}

pub fn join6<A, B, C, D, E, F, ERR>(
    fa: Future<A, ERR>,
    fb: Future<B, ERR>,
    fc: Future<C, ERR>,
    fd: Future<D, ERR>,
    fe: Future<E, ERR>,
    ff: Future<F, ERR>,
) -> Future<(A, B, C, D, E, F), ERR>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    E: Clone + Send + 'static,
    F: Clone + Send + 'static,
    ERR: Clone + Send + 'static + From<HandlerPanic>,
{
    fa.then_async(move |a| {
        fb.then_async(move |b| {
            fc.then_async(move |c| {
                fd.then_async(move |d| fe.then_async(move |e| ff.then(move |f| (a, b, c, d, e, f))))
            })
        })
    })
}

pub fn join7<A, B, C, D, E, F, G, ERR>(
    fa: Future<A, ERR>,
    fb: Future<B, ERR>,
    fc: Future<C, ERR>,
    fd: Future<D, ERR>,
    fe: Future<E, ERR>,
    ff: Future<F, ERR>,
    fg: Future<G, ERR>,
) -> Future<(A, B, C, D, E, F, G), ERR>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    E: Clone + Send + 'static,
    F: Clone + Send + 'static,
    G: Clone + Send + 'static,
    ERR: Clone + Send + 'static + From<HandlerPanic>,
{
    fa.then_async(move |a| {
        fb.then_async(move |b| {
            fc.then_async(move |c| {
                fd.then_async(move |d| {
                    fe.then_async(move |e| {
                        ff.then_async(move |f| fg.then(move |g| (a, b, c, d, e, f, g)))
                    })
                })
            })
        })
    })
}

pub fn join8<A, B, C, D, E, F, G, H, ERR>(
    fa: Future<A, ERR>,
    fb: Future<B, ERR>,
    fc: Future<C, ERR>,
    fd: Future<D, ERR>,
    fe: Future<E, ERR>,
    ff: Future<F, ERR>,
    fg: Future<G, ERR>,
    fh: Future<H, ERR>,
) -> Future<(A, B, C, D, E, F, G, H), ERR>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    E: Clone + Send + 'static,
    F: Clone + Send + 'static,
    G: Clone + Send + 'static,
    H: Clone + Send + 'static,
    ERR: Clone + Send + 'static + From<HandlerPanic>,
{
    fa.then_async(move |a| {
        fb.then_async(move |b| {
            fc.then_async(move |c| {
                fd.then_async(move |d| {
                    fe.then_async(move |e| {
                        ff.then_async(move |f| {
                            fg.then_async(move |g| fh.then(move |h| (a, b, c, d, e, f, g, h)))
                        })
                    })
                })
            })
        })
    })
}

pub fn join9<A, B, C, D, E, F, G, H, I, ERR>(
    fa: Future<A, ERR>,
    fb: Future<B, ERR>,
    fc: Future<C, ERR>,
    fd: Future<D, ERR>,
    fe: Future<E, ERR>,
    ff: Future<F, ERR>,
    fg: Future<G, ERR>,
    fh: Future<H, ERR>,
    fi: Future<I, ERR>,
) -> Future<(A, B, C, D, E, F, G, H, I), ERR>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    E: Clone + Send + 'static,
    F: Clone + Send + 'static,
    G: Clone + Send + 'static,
    H: Clone + Send + 'static,
    I: Clone + Send + 'static,
    ERR: Clone + Send + 'static + From<HandlerPanic>,
{
    fa.then_async(move |a| {
        fb.then_async(move |b| {
            fc.then_async(move |c| {
                fd.then_async(move |d| {
                    fe.then_async(move |e| {
                        ff.then_async(move |f| {
                            fg.then_async(move |g| {
                                fh.then_async(move |h| fi.then(move |i| (a, b, c, d, e, f, g, h, i)))
                            })
                        })
                    })
                })
            })
        })
    })
}

pub fn join10<A, B, C, D, E, F, G, H, I, J, ERR>(
    fa: Future<A, ERR>,
    fb: Future<B, ERR>,
    fc: Future<C, ERR>,
    fd: Future<D, ERR>,
    fe: Future<E, ERR>,
    ff: Future<F, ERR>,
    fg: Future<G, ERR>,
    fh: Future<H, ERR>,
    fi: Future<I, ERR>,
    fj: Future<J, ERR>,
) -> Future<(A, B, C, D, E, F, G, H, I, J), ERR>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    E: Clone + Send + 'static,
    F: Clone + Send + 'static,
    G: Clone + Send + 'static,
    H: Clone + Send + 'static,
    I: Clone + Send + 'static,
    J: Clone + Send + 'static,
    ERR: Clone + Send + 'static + From<HandlerPanic>,
{
    fa.then_async(move |a| {
        fb.then_async(move |b| {
            fc.then_async(move |c| {
                fd.then_async(move |d| {
                    fe.then_async(move |e| {
                        ff.then_async(move |f| {
                            fg.then_async(move |g| {
                                fh.then_async(move |h| {
                                    fi.then_async(move |i| fj.then(move |j| (a, b, c, d, e, f, g, h, i, j)))
                                })
                            })
                        })
                    })
                })
            })
        })
    })
}

pub fn join11<A, B, C, D, E, F, G, H, I, J, K, ERR>(
    fa: Future<A, ERR>,
    fb: Future<B, ERR>,
    fc: Future<C, ERR>,
    fd: Future<D, ERR>,
    fe: Future<E, ERR>,
    ff: Future<F, ERR>,
    fg: Future<G, ERR>,
    fh: Future<H, ERR>,
    fi: Future<I, ERR>,
    fj: Future<J, ERR>,
    fk: Future<K, ERR>,
) -> Future<(A, B, C, D, E, F, G, H, I, J, K), ERR>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    E: Clone + Send + 'static,
    F: Clone + Send + 'static,
    G: Clone + Send + 'static,
    H: Clone + Send + 'static,
    I: Clone + Send + 'static,
    J: Clone + Send + 'static,
    K: Clone + Send + 'static,
    ERR: Clone + Send + 'static + From<HandlerPanic>,
{
    fa.then_async(move |a| {
        fb.then_async(move |b| {
            fc.then_async(move |c| {
                fd.then_async(move |d| {
                    fe.then_async(move |e| {
                        ff.then_async(move |f| {
                            fg.then_async(move |g| {
                                fh.then_async(move |h| {
                                    fi.then_async(move |i| {
                                        fj.then_async(move |j| fk.then(move |k| (a, b, c, d, e, f, g, h, i, j, k)))
                                    })
                                })
                            })
                        })
                    })
                })
            })
        })
    })
}

pub fn join12<A, B, C, D, E, F, G, H, I, J, K, L, ERR>(
    fa: Future<A, ERR>,
    fb: Future<B, ERR>,
    fc: Future<C, ERR>,
    fd: Future<D, ERR>,
    fe: Future<E, ERR>,
    ff: Future<F, ERR>,
    fg: Future<G, ERR>,
    fh: Future<H, ERR>,
    fi: Future<I, ERR>,
    fj: Future<J, ERR>,
    fk: Future<K, ERR>,
    fl: Future<L, ERR>,
) -> Future<(A, B, C, D, E, F, G, H, I, J, K, L), ERR>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    E: Clone + Send + 'static,
    F: Clone + Send + 'static,
    G: Clone + Send + 'static,
    H: Clone + Send + 'static,
    I: Clone + Send + 'static,
    J: Clone + Send + 'static,
    K: Clone + Send + 'static,
    L: Clone + Send + 'static,
    ERR: Clone + Send + 'static + From<HandlerPanic>,
{
    fa.then_async(move |a| {
        fb.then_async(move |b| {
            fc.then_async(move |c| {
                fd.then_async(move |d| {
                    fe.then_async(move |e| {
                        ff.then_async(move |f| {
                            fg.then_async(move |g| {
                                fh.then_async(move |h| {
                                    fi.then_async(move |i| {
                                        fj.then_async(move |j| {
                                            fk.then_async(move |k| fl.then(move |l| (a, b, c, d, e, f, g, h, i, j, k, l)))
                                        })
                                    })
                                })
                            })
                        })
                    })
                })
            })
        })
    })
}
